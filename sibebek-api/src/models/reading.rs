use serde::{Deserialize, Serialize};

/// Latest known value of a channel.
///
/// `Pending` means nothing has arrived on the channel yet, which is not the
/// same thing as a measured zero. A `Value` may hold `NaN` when the last
/// payload could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "state", content = "value")]
pub enum Reading {
    #[default]
    Pending,
    Value(f64),
}

impl Reading {
    pub fn value(&self) -> Option<f64> {
        match self {
            Reading::Pending => None,
            Reading::Value(value) => Some(*value),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Reading::Pending)
    }

    /// The number to feed the rule set. Pending maps to `NaN`, which fails
    /// every threshold comparison.
    pub fn or_inert(&self) -> f64 {
        self.value().unwrap_or(f64::NAN)
    }
}

impl From<f64> for Reading {
    fn from(value: f64) -> Self {
        Reading::Value(value)
    }
}
