/// Loads service configuration from environment variables.
///
/// Implementors derive `serde::Deserialize`; field names map to upper-case
/// variable names (`database_url` reads `DATABASE_URL`). Use `#[serde(default)]`
/// for optional settings.
pub trait Config: Sized + serde::de::DeserializeOwned {
    /// # Panics
    ///
    /// Panics if a required variable is missing or cannot be deserialized.
    fn from_env() -> Self {
        match envy::from_env() {
            Ok(config) => config,
            Err(e) => panic!("failed to load config from environment: {e}"),
        }
    }

    /// Same as [`Config::from_env`] but reads from an explicit set of variables.
    fn from_vars<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter(vars)
    }
}
