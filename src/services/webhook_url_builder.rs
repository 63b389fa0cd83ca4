use reqwest::Url;
use crate::enums::build_error::BuildError;
use crate::enums::lock_state::LockState;
use crate::enums::value_format::ValueFormat;
use crate::helpers::lock_status_formatter::LockStatusFormatter;
use crate::structs::extra_parameter::ExtraParameter;

pub struct WebhookUrlBuilder;

impl WebhookUrlBuilder {
    /// Builds the request URL for one webhook call.
    ///
    /// Extras with an empty key are skipped; the status pair always goes last.
    /// The built query replaces any query already on `base_url`, and a
    /// fragment is carried over after it. The result is the normalized
    /// serialization, except that a base typed without a path does not gain
    /// a trailing slash: `http://h:51828` gives `http://h:51828?state=false`.
    /// Only `http` and `https` bases can be turned into a request URL.
    pub fn build<'a, I>(
        base_url: &str,
        extras: I,
        status_param_name: &str,
        status_value: &str,
    ) -> Result<String, BuildError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let trimmed = base_url.trim();
        let mut url = Url::parse(trimmed).map_err(|e| BuildError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        url.set_query(None);
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in extras.into_iter().filter(|(key, _)| !key.is_empty()) {
                pairs.append_pair(key, value);
            }
            pairs.append_pair(status_param_name, status_value);
        }

        if !matches!(url.scheme(), "http" | "https") {
            return Err(BuildError::UrlConstructionFailed {
                url: base_url.to_string(),
            });
        }

        if url.path() == "/" && !Self::has_typed_path(trimmed) {
            let serialized = url.as_str();
            if let Some(query_start) = serialized.find('?') {
                return Ok(format!("{}{}", &serialized[..query_start - 1], &serialized[query_start..]));
            }
        }

        Ok(url.into())
    }

    /// Whether the text after the authority starts a path. Backslashes count
    /// as slashes, as they do for http URLs.
    fn has_typed_path(base_url: &str) -> bool {
        let after_scheme = base_url.split_once(':').map_or(base_url, |(_, rest)| rest);
        let authority_onward = after_scheme.trim_start_matches(['/', '\\']);

        authority_onward
            .find(['/', '\\', '?', '#'])
            .is_some_and(|i| matches!(authority_onward.as_bytes()[i], b'/' | b'\\'))
    }

    /// Builds the URL for `state` from stored-style settings.
    pub fn build_for_state(
        base_url: &str,
        parameters: &[ExtraParameter],
        status_param_name: &str,
        status_format: ValueFormat,
        state: LockState,
    ) -> Result<String, BuildError> {
        Self::build(
            base_url,
            parameters.iter().map(ExtraParameter::as_pair),
            status_param_name,
            LockStatusFormatter::format(state, status_format),
        )
    }

    /// URL shown next to the settings: the unlocked request, or the raw base
    /// URL when it cannot be built.
    pub fn preview(
        base_url: &str,
        parameters: &[ExtraParameter],
        status_param_name: &str,
        status_format: ValueFormat,
    ) -> String {
        Self::build_for_state(base_url, parameters, status_param_name, status_format, LockState::Unlocked)
            .unwrap_or_else(|_| base_url.to_string())
    }
}
