use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Closed set of visual templates a voucher can be rendered with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateId {
    #[default]
    Default,
    Elegant,
    Modern,
}

impl TemplateId {
    pub const ALL: [TemplateId; 3] = [TemplateId::Default, TemplateId::Elegant, TemplateId::Modern];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::Default => "default",
            TemplateId::Elegant => "elegant",
            TemplateId::Modern => "modern",
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown template id: {0}")]
pub struct UnknownTemplateId(pub String);

impl FromStr for TemplateId {
    type Err = UnknownTemplateId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(TemplateId::Default),
            "elegant" => Ok(TemplateId::Elegant),
            "modern" => Ok(TemplateId::Modern),
            other => Err(UnknownTemplateId(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_strings() {
        for id in TemplateId::ALL {
            assert_eq!(id.as_str().parse::<TemplateId>(), Ok(id));
        }
    }

    #[test]
    fn unknown_id_is_a_typed_error() {
        let err = "unknown".parse::<TemplateId>().unwrap_err();
        assert_eq!(err, UnknownTemplateId("unknown".to_string()));
    }
}
