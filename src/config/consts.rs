/// Name of the descriptor file inside a job directory
pub const DESCRIPTOR_FILE_NAME: &str = "jobdata.json";
/// Config key the execution mode is written under
pub const DEFAULT_EXECUTION_MODE_KEY: &str = "load_data_option";
/// Execution mode meaning "invoked as a standalone job run"
pub const STANDALONE_JOB_RUN_MODE: &str = "runjob";
/// Config keys searched, in order, for the tracking service URL
pub const DEFAULT_TRACKING_URL_KEYS: &[&str] = &["userandjobstate_url", "trackingUrl"];
/// Context keys searched, in order, for the authentication token
pub const DEFAULT_TOKEN_KEYS: &[&str] = &["token"];
/// Log filter used when neither `RUST_LOG` nor the settings file provide one
pub const DEFAULT_LOG_FILTER: &str = "runjob=info";
/// Environment variable naming an optional YAML settings file
pub const SETTINGS_ENV_VAR: &str = "RUNJOB_SETTINGS";
/// Config key holding the command line of the command engine
pub const ENGINE_COMMAND_KEY: &str = "engine_command";
/// Environment variable exported to the command engine with the job id
pub const JOB_ID_ENV_VAR: &str = "RUNJOB_JOB_ID";
