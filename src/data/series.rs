use serde::{Deserialize, Serialize};

use super::value::Value;

/// Named ordered column of cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    name: String,
    values: Vec<Value>,
}

impl Series {
    pub fn new(name: impl Into<String>, values: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Convenience constructor from anything convertible into cells.
    pub fn of<N, I, V>(name: N, values: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// Positional append of `other`'s cells after `self`'s, keeping
    /// `self`'s name. The result has a fresh zero-based index.
    pub fn concat(&self, other: &Series) -> Series {
        let mut values = self.values.clone();
        values.extend_from_slice(&other.values);
        Series {
            name: self.name.clone(),
            values,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concat_keeps_order_and_name() {
        let left = Series::of("age", [30, 40]);
        let right = Series::of("years", [50]);
        let joined = left.concat(&right);

        assert_eq!(joined.name(), "age");
        assert_eq!(joined.len(), 3);
        assert_eq!(joined.get(2), Some(&Value::Int(50)));
    }
}
