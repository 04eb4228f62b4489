/// A configuration value, together with the (inclusive) range of acceptable values.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: Clone + PartialOrd> ConfigOption<T> {
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }

    /// Sets the value of the option, if the value is within range.
    ///
    /// Returns the value given back if the value is out of range, and leaves the option unchanged.
    pub fn set(&mut self, value: T) -> Result<(), T> {
        match self.min <= value && value <= self.max {
            true => {
                self.value = value;
                Ok(())
            }
            false => Err(value),
        }
    }
}

#[cfg(test)]
mod config_option_tests {
    use super::*;

    #[test]
    fn bounded_set() {
        let mut option = ConfigOption {
            name: "workers",
            min: 1,
            max: 4,
            value: 1,
        };

        assert_eq!(option.set(4), Ok(()));
        assert_eq!(option.value, 4);

        assert_eq!(option.set(0), Err(0));
        assert_eq!(option.set(5), Err(5));
        assert_eq!(option.value, 4);
        assert_eq!(option.min_max(), (1, 4));
    }
}
