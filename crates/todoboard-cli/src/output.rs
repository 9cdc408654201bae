//! The JSON envelope every `todoboard` command prints.
//!
//! Results go to stdout as `{"success": true, "api_version", "data"}`. Failures
//! go to stderr as `{"success": false, "api_version", "error"}` and end the
//! process with exit code 1, so scripts can branch on either.

use serde::Serialize;

const API_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Serialize)]
pub struct CliResponse<T: Serialize> {
    pub success: bool,
    pub api_version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> CliResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            api_version: API_VERSION,
            data: Some(data),
            error: None,
        }
    }

    fn render(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            format!(
                "{{\"success\":false,\"api_version\":\"{}\",\"error\":\"unserializable response: {}\"}}",
                API_VERSION, e
            )
        })
    }
}

impl CliResponse<()> {
    fn failed(message: &str) -> Self {
        Self {
            success: false,
            api_version: API_VERSION,
            data: None,
            error: Some(message.to_string()),
        }
    }
}

/// Boards and other collections, with their length.
#[derive(Serialize)]
pub struct ListResponse<T: Serialize> {
    pub items: Vec<T>,
    pub count: usize,
}

pub fn output_success<T: Serialize>(data: T) {
    println!("{}", CliResponse::ok(data).render());
}

pub fn output_list<T: Serialize>(items: Vec<T>) {
    let count = items.len();
    output_success(ListResponse { items, count });
}

/// Report a failed board command on stderr and exit with status 1.
///
/// Mutations are already saved or rejected by the time this runs, so nothing
/// is left to flush.
pub fn output_error(message: &str) -> ! {
    eprintln!("{}", CliResponse::failed(message).render());
    std::process::exit(1);
}
