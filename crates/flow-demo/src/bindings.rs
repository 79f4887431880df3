use std::fmt;

/// Values shared by every step of the walkthrough.
#[derive(Debug, Clone, PartialEq)]
pub struct Bindings {
    pub age: i32,
    pub average: f64,
    pub letter: char,
    pub name: String,
    pub active: bool,
}

impl Default for Bindings {
    fn default() -> Self {
        Self {
            age: 25,
            average: 85.5,
            letter: 'A',
            name: "Juan".to_string(),
            active: true,
        }
    }
}

impl fmt::Display for Bindings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "age={} average={} letter={:?} name={:?} active={}",
            self.age, self.average, self.letter, self.name, self.active
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_literals() {
        let bindings = Bindings::default();
        assert_eq!(bindings.age, 25);
        assert_eq!(bindings.average, 85.5);
        assert_eq!(bindings.letter, 'A');
        assert_eq!(bindings.name, "Juan");
        assert!(bindings.active);
    }

    #[test]
    fn display_lists_every_field() {
        let rendered = Bindings::default().to_string();
        assert_eq!(
            rendered,
            r#"age=25 average=85.5 letter='A' name="Juan" active=true"#
        );
    }
}
