//! The ten demonstrations and the branch chains behind them.
//!
//! Every chain is evaluated top to bottom and the first matching arm wins.
//! Some chains overlap (`inclusive_bound`) and one can match nothing
//! (`ordering` with equal operands); both are kept as written.

use std::fmt;
use std::io::Write;

use tracing::trace;

use crate::{Bindings, Result};

pub const NUMBER: i32 = 15;
pub const ITERATIONS: u32 = 5;
pub const LAST_ITERATION: u32 = 4;
pub const COUNTDOWN_START: i32 = 10;
pub const COMPARE_X: i32 = 10;
pub const COMPARE_Y: i32 = 20;
pub const COUNTER_START: i32 = 5;
pub const FINAL_LINE: &str = "Fin del programa";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Adulthood,
    Grade,
    RangedArithmetic,
    CountedLoop,
    Countdown,
    Comparisons,
    InclusiveBound,
    IncrementDecrement,
    Flag,
    Completion,
}

impl Step {
    /// Execution order.
    pub const ALL: [Step; 10] = [
        Step::Adulthood,
        Step::Grade,
        Step::RangedArithmetic,
        Step::CountedLoop,
        Step::Countdown,
        Step::Comparisons,
        Step::InclusiveBound,
        Step::IncrementDecrement,
        Step::Flag,
        Step::Completion,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Step::Adulthood => "adulthood",
            Step::Grade => "grade",
            Step::RangedArithmetic => "ranged-arithmetic",
            Step::CountedLoop => "counted-loop",
            Step::Countdown => "countdown",
            Step::Comparisons => "comparisons",
            Step::InclusiveBound => "inclusive-bound",
            Step::IncrementDecrement => "increment-decrement",
            Step::Flag => "flag",
            Step::Completion => "completion",
        }
    }

    /// Runs this step, writing one line per printed value.
    pub fn write<W: Write + ?Sized>(self, bindings: &Bindings, out: &mut W) -> Result<()> {
        match self {
            Step::Adulthood => emit(out, adulthood(bindings.age)),
            Step::Grade => emit(out, grade(bindings.average)),
            Step::RangedArithmetic => {
                let (label, number) = ranged_arithmetic(NUMBER);
                trace!(number, "reassigned");
                emit(out, label)
            }
            Step::CountedLoop => {
                for i in 0..ITERATIONS {
                    emit(out, iteration_label(i))?;
                }
                Ok(())
            }
            Step::Countdown => {
                let mut counter = COUNTDOWN_START;
                while counter > 0 {
                    emit(out, countdown_label(counter))?;
                    counter -= 1;
                }
                Ok(())
            }
            Step::Comparisons => {
                emit(out, equality(COMPARE_X, COMPARE_Y))?;
                if let Some(label) = ordering(COMPARE_X, COMPARE_Y) {
                    emit(out, label)?;
                }
                Ok(())
            }
            Step::InclusiveBound => emit(out, inclusive_bound(COMPARE_X)),
            Step::IncrementDecrement => {
                let mut value = COUNTER_START;
                value += 1;
                emit(out, value)?;
                value -= 1;
                emit(out, value)
            }
            Step::Flag => emit(out, flag_state(bindings.active)),
            Step::Completion => emit(out, FINAL_LINE),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn emit<W: Write + ?Sized>(out: &mut W, line: impl fmt::Display) -> Result<()> {
    trace!(line = %line, "emit");
    writeln!(out, "{}", line)?;
    Ok(())
}

pub fn adulthood(age: i32) -> &'static str {
    if age < 18 {
        "Menor de edad"
    } else {
        "Mayor de edad"
    }
}

pub fn grade(average: f64) -> &'static str {
    if average >= 90.0 {
        "Excelente"
    } else if average >= 80.0 {
        "Muy bueno"
    } else if average >= 70.0 {
        "Bueno"
    } else if average >= 60.0 {
        "Regular"
    } else {
        "Necesita mejorar"
    }
}

/// Returns the label for `number` and the value it is reassigned to.
pub fn ranged_arithmetic(number: i32) -> (&'static str, i32) {
    if number > 20 {
        ("Mayor a 20", number - 10)
    } else if number > 10 {
        ("Entre 11 y 20", number + 5)
    } else if number > 5 {
        ("Entre 6 y 10", number * 2)
    } else {
        ("Menor o igual a 5", number + 1)
    }
}

pub fn iteration_label(i: u32) -> &'static str {
    if i == 0 {
        "Primera iteracion"
    } else if i == LAST_ITERATION {
        "Ultima iteracion"
    } else {
        "Iteracion intermedia"
    }
}

pub fn countdown_label(counter: i32) -> &'static str {
    if counter > 7 {
        "Alto"
    } else if counter > 3 {
        "Medio"
    } else {
        "Bajo"
    }
}

pub fn equality(x: i32, y: i32) -> &'static str {
    if x == y {
        "Iguales"
    } else {
        "Diferentes"
    }
}

/// `None` when the operands are equal: neither arm of the chain matches.
pub fn ordering(x: i32, y: i32) -> Option<&'static str> {
    if x < y {
        Some("x es menor")
    } else if x > y {
        Some("x es mayor")
    } else {
        None
    }
}

pub fn inclusive_bound(x: i32) -> &'static str {
    if x <= 10 {
        "x menor o igual a 10"
    } else {
        "x mayor o igual a 10"
    }
}

pub fn flag_state(active: bool) -> &'static str {
    if active {
        "Esta activo"
    } else {
        "Esta inactivo"
    }
}
