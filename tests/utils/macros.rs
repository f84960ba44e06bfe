#[allow(unused_macros)]
macro_rules! assert_error {
    ($res:expr, $error:expr) => {{
        assert_eq!($res.status(), $error.status());

        let res_json: serde_json::Value = $res.json().await;
        assert_eq!(res_json["code"], $error.code());
    }};
}

#[allow(unused_imports)]
pub(crate) use assert_error;

#[allow(unused_macros)]
macro_rules! enable_logging {
    ($level:ident) => {{
        use ::tracing::level_filters::LevelFilter;
        use ::tracing_subscriber::{
            layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
        };

        let env_filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::$level.into())
            .from_env_lossy();

        let _ = ::tracing_subscriber::registry()
            .with(
                ::tracing_subscriber::fmt::layer()
                    .with_test_writer()
                    .with_line_number(true)
                    .with_filter(env_filter),
            )
            .try_init();
    }};
}

#[allow(unused_imports)]
pub(crate) use enable_logging;
