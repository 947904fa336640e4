use firscope::response::{FrequencyResponseEngine, FrequencyScale, ResponseConfig, ResponseMethod};
use firscope::spectrum::{SpectrogramConfig, SpectrogramScaling};
use firscope::WindowType;

#[test]
fn response_config_from_toml() {
    let config: ResponseConfig = toml::from_str(
        r#"
        num_points = 8192
        method = "fft"

        [scale]
        unit = "hz"
        sample_rate = 44100.0
        "#,
    )
    .unwrap();

    assert_eq!(config.num_points, 8192);
    assert_eq!(config.method, ResponseMethod::Fft);
    assert_eq!(config.scale, FrequencyScale::Hz { sample_rate: 44100.0 });

    let response = FrequencyResponseEngine::new(config).analyze(&[1.0]).unwrap();
    assert_eq!(response.len(), 8192);
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let config: ResponseConfig = toml::from_str("").unwrap();
    assert_eq!(config, ResponseConfig::default());

    let config: SpectrogramConfig = toml::from_str("hop_size = 64").unwrap();
    assert_eq!(config.frame_size, 256);
    assert_eq!(config.hop_size, 64);
    assert_eq!(config.window_type, WindowType::Hann);
    assert!(config.validate().is_ok());
}

#[test]
fn spectrogram_config_from_toml() {
    let config: SpectrogramConfig = toml::from_str(
        r#"
        frame_size = 1024
        hop_size = 512
        window_type = "blackman"
        transform_length = 2048
        scaling = "power_spectral_density"
        "#,
    )
    .unwrap();

    assert_eq!(config.window_type, WindowType::Blackman);
    assert_eq!(config.fft_size(), 2048);
    assert_eq!(config.scaling, SpectrogramScaling::PowerSpectralDensity);
}

#[test]
fn invalid_values_fail_validation_not_parsing() {
    let config: SpectrogramConfig = toml::from_str("frame_size = 128\nhop_size = 256").unwrap();
    assert!(config.validate().is_err());
}
