use anyhow::Result;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// Resolve an optional leading `~/` to the current user's HOME path.
pub fn resolve_home(path: &str) -> Result<String> {
    if path.starts_with("~/") {
        let home = home_dir()?;
        Ok(path.replacen('~', &home, 1))
    } else {
        Ok(path.to_string())
    }
}

/// Return the path to the current user home directory.
///
/// Implement simple variable lookup for linux.
/// Other OS are not currently supported.
fn home_dir() -> Result<String> {
    match std::env::var("HOME") {
        Err(std::env::VarError::NotPresent) => anyhow::bail!("unable to lookup the $HOME path"),
        Err(std::env::VarError::NotUnicode(_)) => anyhow::bail!("unable to UTF-8 decode $HOME"),
        Ok(path) => Ok(path),
    }
}

/// Render a millisecond epoch timestamp, or indicate it was not recorded yet.
///
/// The API uses values `<= 0` to mean "not yet recorded".
pub fn millis_or_not_set(millis: i64) -> String {
    if millis <= 0 {
        return String::from("Not Set");
    }
    let nanos = i128::from(millis) * 1_000_000;
    match OffsetDateTime::from_unix_timestamp_nanos(nanos) {
        Ok(timestamp) => timestamp
            .format(&Rfc3339)
            .unwrap_or_else(|_| millis.to_string()),
        Err(_) => millis.to_string(),
    }
}

/// Report on the set status of an optional value (set vs not set).
pub fn set_or_not<T>(value: &Option<T>) -> &'static str {
    match value.is_some() {
        true => "Set",
        false => "Not Set",
    }
}

/// Report an optional value, or indicate if it is not set.
pub fn value_or_not_set<T: ToString>(value: &Option<T>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => String::from("Not Set"),
    }
}

#[cfg(test)]
mod tests {
    use super::millis_or_not_set;

    #[test]
    fn millis_not_recorded() {
        assert_eq!(millis_or_not_set(0), "Not Set");
        assert_eq!(millis_or_not_set(-1), "Not Set");
    }

    #[test]
    fn millis_formatted() {
        assert_eq!(millis_or_not_set(1700000000000), "2023-11-14T22:13:20Z");
    }
}
