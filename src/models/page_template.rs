use serde::{Deserialize, Serialize};

/// Layout a custom page is rendered with.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    Eq,
    PartialEq,
    Serialize,
    Deserialize,
    sqlx::Type,
)]
#[sqlx(type_name = "text", rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum PageTemplate {
    #[default]
    Default,
    FullWidth,
    Landing,
}

impl PageTemplate {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::FullWidth => "full-width",
            Self::Landing => "landing",
        }
    }
}

impl std::fmt::Display for PageTemplate {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl PartialEq<&str> for PageTemplate {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl std::str::FromStr for PageTemplate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "default" => Ok(Self::Default),
            "full-width" => Ok(Self::FullWidth),
            "landing" => Ok(Self::Landing),
            _ => Err(format!("invalid page template: {}", s)),
        }
    }
}
