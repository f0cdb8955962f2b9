/// Naming of the unknowns of a system, `x_1`, `x_2`, ... by default.
///
/// Unknowns are addressed by their zero based column everywhere in the crate;
/// only the rendered name is one based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableConfig {
    pub prefix: String,
}

impl Default for VariableConfig {
    fn default() -> Self {
        VariableConfig::new("x")
    }
}

impl VariableConfig {
    pub fn new(prefix: &str) -> Self {
        VariableConfig {
            prefix: prefix.to_owned(),
        }
    }

    pub fn gen(&self, col: usize) -> String {
        format!("{}_{}", self.prefix, col + 1)
    }

    pub fn gens(&self, n: usize) -> Vec<String> {
        (0..n).map(|col| self.gen(col)).collect()
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variable_names() {
        let config = VariableConfig::default();
        assert_eq!(config.gen(0), "x_1");
        assert_eq!(config.gens(3), vec!["x_1", "x_2", "x_3"]);
        assert_eq!(VariableConfig::new("t").gen(4), "t_5");
    }
}
