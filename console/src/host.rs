//! Terminal implementations of the core's I/O and user-facing seams.

use std::io::{self, BufRead, Write};

use async_trait::async_trait;
use country_core::{
    ApiError, ConfirmPrompt, Confirmer, HttpMethod, HttpRequest, HttpResponse, Notification,
    Notifier, Severity, Transport,
};
use tracing::{debug, warn};

/// Blocking ureq requests run on tokio's blocking pool.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for UreqTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let agent = self.agent.clone();
        tokio::task::spawn_blocking(move || execute_blocking(&agent, request))
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?
    }
}

fn execute_blocking(agent: &ureq::Agent, req: HttpRequest) -> Result<HttpResponse, ApiError> {
    let result = match (req.method, req.body) {
        (HttpMethod::Get, _) => agent.get(&req.path).call(),
        (HttpMethod::Delete, _) => agent.delete(&req.path).call(),
        (HttpMethod::Post, Some(body)) => agent
            .post(&req.path)
            .content_type("application/json")
            .send(body.as_bytes()),
        (HttpMethod::Post, None) => agent.post(&req.path).send_empty(),
        (HttpMethod::Put, Some(body)) => agent
            .put(&req.path)
            .content_type("application/json")
            .send(body.as_bytes()),
        (HttpMethod::Put, None) => agent.put(&req.path).send_empty(),
    };
    let mut response = result.map_err(|e| {
        warn!(path = %req.path, error = %e, "request failed");
        ApiError::Transport(e.to_string())
    })?;

    let status = response.status().as_u16();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    debug!(status, path = %req.path, "response received");
    Ok(HttpResponse::new(status, body))
}

/// Prints each toast as a single tagged line on stderr.
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notification: Notification) {
        eprintln!("{}", format_toast(&notification));
    }
}

pub fn format_toast(notification: &Notification) -> String {
    let icon = match notification.severity {
        Severity::Success => "✔",
        Severity::Error => "✖",
        Severity::Warning => "!",
        Severity::Info => "i",
    };
    format!("[{icon} {}] {}", notification.severity, notification.message)
}

/// Asks on stdout and reads the answer from stdin.
pub struct StdinConfirmer;

#[async_trait]
impl Confirmer for StdinConfirmer {
    async fn confirm(&self, prompt: &ConfirmPrompt) -> bool {
        let question = format_question(prompt);
        let confirm_label = prompt.confirm_label.clone();
        let answer = tokio::task::spawn_blocking(move || -> io::Result<String> {
            let mut stdout = io::stdout().lock();
            stdout.write_all(question.as_bytes())?;
            stdout.flush()?;
            let mut line = String::new();
            io::stdin().lock().read_line(&mut line)?;
            Ok(line)
        })
        .await;

        match answer {
            Ok(Ok(line)) => is_yes(&line, &confirm_label),
            Ok(Err(err)) => {
                warn!(%err, "could not read confirmation");
                false
            }
            Err(err) => {
                warn!(%err, "confirmation task failed");
                false
            }
        }
    }
}

fn format_question(prompt: &ConfirmPrompt) -> String {
    format!(
        "{} {} [{}/{}] ",
        prompt.title, prompt.text, prompt.confirm_label, prompt.cancel_label
    )
}

fn is_yes(answer: &str, confirm_label: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case(confirm_label)
}
