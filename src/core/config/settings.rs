use super::parsing::{
    env_optional, env_or_default, parse_bool, parse_cors_origins, parse_environment,
    parse_fraction, parse_u64,
};
use super::types::{
    ApiSettings, ConfigError, CorsSettings, GradingSettings, RuntimeSettings, ServerHost,
    ServerPort, ServerSettings, Settings, TelemetrySettings,
};

impl Settings {
    pub(crate) fn load() -> Result<Self, ConfigError> {
        let host = env_or_default("GRADING_HOST", "0.0.0.0");
        let port = env_or_default("GRADING_PORT", "5001");

        let environment =
            parse_environment(env_optional("GRADING_ENV").or_else(|| env_optional("ENVIRONMENT")));

        let project_name = env_or_default("PROJECT_NAME", "Grading Mock API");
        let version = env_or_default("VERSION", env!("CARGO_PKG_VERSION"));

        let cors_origins = parse_cors_origins(env_optional("BACKEND_CORS_ORIGINS"))?;

        let seed = env_optional("GRADING_SEED")
            .map(|value| parse_u64("GRADING_SEED", value))
            .transpose()?;
        let grader_id = env_or_default("GRADER_ID", "TA_001");
        let score_fraction_min =
            parse_fraction("SCORE_FRACTION_MIN", env_or_default("SCORE_FRACTION_MIN", "0.6"))?;
        let score_fraction_max =
            parse_fraction("SCORE_FRACTION_MAX", env_or_default("SCORE_FRACTION_MAX", "0.95"))?;

        let log_level = env_or_default("LOG_LEVEL", "info");
        let json = env_optional("LOG_JSON").map(|value| parse_bool(&value)).unwrap_or(false);
        let prometheus_enabled =
            env_optional("PROMETHEUS_ENABLED").map(|value| parse_bool(&value)).unwrap_or(false);

        let settings = Self {
            server: ServerSettings { host: ServerHost::parse(host)?, port: ServerPort::parse(port)? },
            runtime: RuntimeSettings { environment },
            api: ApiSettings { project_name, version },
            cors: CorsSettings { origins: cors_origins },
            grading: GradingSettings { seed, grader_id, score_fraction_min, score_fraction_max },
            telemetry: TelemetrySettings { log_level, json, prometheus_enabled },
        };

        settings.validate()?;
        Ok(settings)
    }

    pub(crate) fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host.0, self.server.port.0)
    }

    pub(crate) fn server_host(&self) -> &str {
        &self.server.host.0
    }

    pub(crate) fn server_port(&self) -> u16 {
        self.server.port.0
    }

    pub(crate) fn api(&self) -> &ApiSettings {
        &self.api
    }

    pub(crate) fn cors(&self) -> &CorsSettings {
        &self.cors
    }

    pub(crate) fn grading(&self) -> &GradingSettings {
        &self.grading
    }

    pub(crate) fn telemetry(&self) -> &TelemetrySettings {
        &self.telemetry
    }

    pub(crate) fn runtime(&self) -> &RuntimeSettings {
        &self.runtime
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.grading.score_fraction_min > self.grading.score_fraction_max {
            return Err(ConfigError::InvalidValue {
                field: "SCORE_FRACTION_MIN",
                value: format!(
                    "{} > SCORE_FRACTION_MAX {}",
                    self.grading.score_fraction_min, self.grading.score_fraction_max
                ),
            });
        }

        if self.grading.grader_id.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "GRADER_ID",
                value: String::from("<empty>"),
            });
        }

        Ok(())
    }
}
