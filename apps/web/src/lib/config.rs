//! Build-time configuration for the backend endpoint and site feature flags,
//! with an optional runtime override read from `window.WEDDING_CONFIG` so static
//! deployments can change endpoints or toggle sections without rebuilding.
//! The config is resolved once per page load and then shared.

use gatekeeper::FeatureFlags;
use std::sync::OnceLock;
use tracing::warn;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_base_url: String,
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Returns the process-wide config, loading it on first use.
    pub fn load() -> &'static Self {
        CONFIG.get_or_init(Self::resolve)
    }

    fn resolve() -> Self {
        let mut config = Self {
            api_base_url: option_env!("WEDDING_API_BASE_URL")
                .unwrap_or("")
                .to_string(),
            features: FeatureFlags::default(),
        };
        apply_features(&mut config, option_env!("WEDDING_FEATURES").unwrap_or(""));

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }
}

#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
    features: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
    if let Some(value) = runtime.features {
        apply_features(config, &value);
    }
}

/// Layers a flag string over the current flags. A malformed string leaves the
/// previous flags untouched.
fn apply_features(config: &mut AppConfig, input: &str) {
    if let Err(err) = config.features.apply(input) {
        warn!(%err, "ignoring feature flag override");
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("WEDDING_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        api_base_url: read_runtime_value(&object, "api_base_url"),
        features: read_runtime_value(&object, "features"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()?;
    normalize_runtime_value(&value)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{apply_runtime_overrides, normalize_runtime_value, AppConfig, RuntimeConfig};
    use gatekeeper::FeatureFlags;

    fn base_config() -> AppConfig {
        AppConfig {
            api_base_url: "https://api.default".to_string(),
            features: FeatureFlags::default(),
        }
    }

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(
            normalize_runtime_value("  https://api.example.wedding "),
            Some("https://api.example.wedding".to_string())
        );
    }

    #[test]
    fn apply_runtime_overrides_ignores_empty_values() {
        let mut config = base_config();
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value(" "),
            features: normalize_runtime_value(""),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.api_base_url, "https://api.default");
        assert_eq!(config.features, FeatureFlags::default());
    }

    #[test]
    fn apply_runtime_overrides_layers_features() {
        let mut config = base_config();
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value("https://api.override"),
            features: normalize_runtime_value("couple-area=on,gallery=off"),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.api_base_url, "https://api.override");
        assert!(config.features.couple_area);
        assert!(!config.features.gallery);
        assert!(config.features.rsvp);
    }

    #[test]
    fn malformed_features_keep_previous_flags() {
        let mut config = base_config();
        config.features.couple_area = true;
        let runtime = RuntimeConfig {
            api_base_url: None,
            features: Some("gallery=off,rsvp=later".to_string()),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert!(config.features.couple_area);
        assert!(config.features.gallery);
    }
}
