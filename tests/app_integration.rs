use std::fs;
use tracing::info;
use tripfx::core::{
    ConversionQuery, Converter, CurrencyRateProvider, FxError, RateResolver, RateSource,
    ResolutionPolicy,
};
use tripfx::{AppCommand, RunOptions, run_command};

mod test_utils {
    use std::fs;

    pub fn write_config(content: &str) -> tempfile::NamedTempFile {
        let config_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        fs::write(config_file.path(), content).expect("Failed to write config file");
        config_file
    }
}

fn convert_command(amount: &str, from: &str, to: &str) -> AppCommand {
    AppCommand::Convert {
        amount: amount.to_string(),
        from: from.to_string(),
        to: to.to_string(),
        json: true,
    }
}

#[test_log::test(tokio::test)]
async fn test_full_app_flow_with_config() {
    let config_file = test_utils::write_config(
        r#"
        currencies:
          - { code: "USD", name: "US Dollar", symbol: "$" }
          - { code: "MXN", name: "Mexican Peso", symbol: "MX$" }
        rates:
          - { from: "USD", to: "MXN", rate: 17.2 }
        popular:
          - { from: "MXN", to: "USD", label: "Cancun" }
        policy: strict
    "#,
    );
    let path = config_file.path().to_str().unwrap();

    for command in [
        convert_command("120", "USD", "MXN"),
        AppCommand::Rate {
            from: "MXN".to_string(),
            to: "USD".to_string(),
        },
        AppCommand::Popular,
        AppCommand::Currencies,
    ] {
        let result = run_command(
            command,
            RunOptions {
                config_path: Some(path),
                strict: false,
            },
        )
        .await;
        assert!(result.is_ok(), "Command failed with: {:?}", result.err());
    }

    // EUR is not in this config's catalog
    let result = run_command(
        convert_command("10", "USD", "EUR"),
        RunOptions {
            config_path: Some(path),
            strict: false,
        },
    )
    .await;
    assert!(result.is_err());
}

#[test_log::test(tokio::test)]
async fn test_strict_flag_overrides_lenient_config() {
    let config_file = test_utils::write_config("policy: lenient\n");
    let path = config_file.path().to_str().unwrap();

    let lenient = run_command(
        convert_command("10", "CAD", "AUD"),
        RunOptions {
            config_path: Some(path),
            strict: false,
        },
    )
    .await;
    assert!(lenient.is_ok());

    let strict = run_command(
        convert_command("10", "CAD", "AUD"),
        RunOptions {
            config_path: Some(path),
            strict: true,
        },
    )
    .await;
    let err = strict.unwrap_err();
    info!(%err, "Strict conversion rejected");
    assert!(matches!(
        err.downcast_ref::<FxError>(),
        Some(FxError::RateUnavailable { .. })
    ));
}

#[test_log::test(tokio::test)]
async fn test_invalid_inputs_are_rejected() {
    let config_file = test_utils::write_config("{}\n");
    let path = config_file.path().to_str().unwrap();

    let bad_amount = run_command(
        convert_command("twelve", "USD", "EUR"),
        RunOptions {
            config_path: Some(path),
            strict: false,
        },
    )
    .await;
    assert!(bad_amount.is_err());

    let bad_rates = test_utils::write_config(
        r#"
        rates:
          - { from: "USD", to: "EUR", rate: -0.85 }
    "#,
    );
    let result = run_command(
        AppCommand::Popular,
        RunOptions {
            config_path: Some(bad_rates.path().to_str().unwrap()),
            strict: false,
        },
    )
    .await;
    assert!(result.is_err());

    let missing = run_command(
        AppCommand::Currencies,
        RunOptions {
            config_path: Some("/nonexistent/tripfx.yaml"),
            strict: false,
        },
    )
    .await;
    assert!(missing.is_err());
}

#[test_log::test(tokio::test)]
async fn test_setup_writes_loadable_config() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.yaml");
    tripfx::cli::setup::setup_at_path(&config_path).unwrap();
    assert!(fs::metadata(&config_path).is_ok());

    let result = run_command(
        convert_command("100", "USD", "EUR"),
        RunOptions {
            config_path: Some(config_path.to_str().unwrap()),
            strict: true,
        },
    )
    .await;
    assert!(result.is_ok(), "Command failed with: {:?}", result.err());
}

#[test_log::test(tokio::test)]
async fn test_library_conversion_properties() {
    let resolver = RateResolver::with_defaults().unwrap();

    for currency in resolver.catalog().iter() {
        assert_eq!(resolver.resolve_rate(&currency.code, &currency.code), 1.0);
        assert_eq!(resolver.convert(0.0, "USD", &currency.code), 0.0);
    }
    assert_eq!(resolver.convert(100.0, "USD", "EUR"), 85.0);
    assert_eq!(resolver.resolve_rate("XXX", "YYY"), 1.0);

    let converter = Converter::new(resolver, ResolutionPolicy::Lenient);
    let query = ConversionQuery::new(100.0, "USD", "EUR");
    let there = converter.convert(&query).await.unwrap();
    let back = converter.convert(&query.swapped()).await.unwrap();
    assert_eq!(there.source, RateSource::Direct);
    assert_eq!(back.rate, 1.18);
    assert_eq!(converter.get_rate("CHF", "USD").await.unwrap(), 1.0 / 0.92);

    let json = serde_json::to_value(&there).unwrap();
    assert_eq!(json["converted"], 85.0);
    assert_eq!(json["source"], "direct");
    assert_eq!(json["query"]["from"], "USD");
}
