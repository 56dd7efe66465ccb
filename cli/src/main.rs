use clap::{Parser, Subcommand};
use learnpath::model::entity::{PaymentMethod, Plan, ProjectSubmission};
use learnpath::web::ErrorResponse;
use learnpath::web::dto::path::PathResponse;
use learnpath::web::middlewares::SESSION_COOKIE;
use reqwest::{Client, Method, RequestBuilder, Response, header};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use thiserror::Error;

#[derive(Parser, Debug)]
#[command(about = "Walk a learnpath session from the terminal", long_about = None)]
pub struct Cli {
    /// Base URL of a running learnpath server
    #[arg(long, global = true, env = "LEARNPATH_SERVER", default_value = "http://127.0.0.1:5000")]
    pub server: String,

    /// Session token printed by `start`
    #[arg(long, global = true, env = "LEARNPATH_TOKEN")]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start a new session and print its token
    Start,
    /// Show stage and progress of the session
    Status,
    /// Submit diagnostic answers from a JSON file
    Diagnostic {
        #[arg(long)]
        file: String,
    },
    /// Show the learning path
    Path,
    /// Complete a module
    Complete { module_id: String },
    /// List payment plans
    Plans,
    /// Confirm payment for a plan
    Pay {
        #[arg(long)]
        plan: String,
        #[arg(long, value_parser = parse_method)]
        method: PaymentMethod,
    },
    /// Final project
    Project {
        #[command(subcommand)]
        action: ProjectCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProjectCommands {
    Show,
    Submit {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        #[arg(long, default_value = "")]
        application: String,
        #[arg(long, default_value = "")]
        resources: String,
        #[arg(long)]
        attachment: Option<String>,
    },
    Review,
    Complete,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("server answered {status}: {message}")]
    Server { status: u16, message: String },
    #[error("no session token, run `start` first and pass --token")]
    MissingToken,
    #[error("server did not set the session cookie")]
    MissingCookie,
}

type CliResult<T> = std::result::Result<T, CliError>;

fn parse_method(s: &str) -> Result<PaymentMethod, String> {
    match s {
        "card" => Ok(PaymentMethod::Card),
        "paypal" => Ok(PaymentMethod::Paypal),
        other => Err(format!("unknown payment method `{other}`, use card or paypal")),
    }
}

struct Api {
    client: Client,
    server: String,
    token: Option<String>,
}

impl Api {
    fn request(&self, method: Method, path: &str) -> CliResult<RequestBuilder> {
        let token = self.token.as_deref().ok_or(CliError::MissingToken)?;
        Ok(self
            .client
            .request(method, format!("{}{}", self.server, path))
            .header(header::COOKIE, format!("{SESSION_COOKIE}={token}")))
    }

    fn public(&self, method: Method, path: &str) -> RequestBuilder {
        self.client.request(method, format!("{}{}", self.server, path))
    }
}

async fn read<T: DeserializeOwned>(resp: Response) -> CliResult<T> {
    let status = resp.status();
    if !status.is_success() {
        let message = match resp.json::<ErrorResponse>().await {
            Ok(err) => err.message,
            Err(_) => String::from("no details"),
        };
        return Err(CliError::Server {
            status: status.as_u16(),
            message,
        });
    }
    Ok(resp.json::<T>().await?)
}

fn print_json(value: &Value) -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_path(path: &PathResponse) {
    for module in &path.modules {
        let premium = if module.requires_payment { " $" } else { "" };
        println!(
            "{:>2}. [{:<9}] {:<4} {}{}",
            module.position,
            module.status.to_string(),
            module.id,
            module.title,
            premium
        );
    }
    println!(
        "progress: {}% ({}/{}), final project {}",
        path.progress,
        path.completed,
        path.total,
        if path.project_unlocked { "open" } else { "locked" }
    );
}

async fn execute(api: &Api, command: Commands) -> CliResult<()> {
    match command {
        Commands::Start => {
            let resp = api.public(Method::POST, "/api/v1/session/start").send().await?;
            let token = resp
                .cookies()
                .find(|c| c.name() == SESSION_COOKIE)
                .map(|c| c.value().to_string())
                .ok_or(CliError::MissingCookie)?;
            let session: Value = read(resp).await?;
            print_json(&session)?;
            println!("export LEARNPATH_TOKEN={token}");
        }

        Commands::Status => {
            let resp = api.request(Method::GET, "/api/v1/session")?.send().await?;
            print_json(&read::<Value>(resp).await?)?;
        }

        Commands::Diagnostic { file } => {
            let answers: Value = serde_json::from_slice(&std::fs::read(file)?)?;
            let resp = api
                .request(Method::PUT, "/api/v1/diagnostic")?
                .json(&answers)
                .send()
                .await?;
            print_json(&read::<Value>(resp).await?)?;
        }

        Commands::Path => {
            let resp = api.request(Method::GET, "/api/v1/path")?.send().await?;
            print_path(&read::<PathResponse>(resp).await?);
        }

        Commands::Complete { module_id } => {
            let path = format!("/api/v1/path/modules/{module_id}/complete");
            let resp = api.request(Method::POST, &path)?.send().await?;
            print_path(&read::<PathResponse>(resp).await?);
        }

        Commands::Plans => {
            let resp = api.public(Method::GET, "/api/v1/payment/plans").send().await?;
            for plan in read::<Vec<Plan>>(resp).await? {
                let mark = if plan.recommended() { " (recommended)" } else { "" };
                println!(
                    "{:<9} {:<24} {}.{:02} USD{}",
                    plan.id(),
                    plan.name(),
                    plan.price_cents() / 100,
                    plan.price_cents() % 100,
                    mark
                );
            }
        }

        Commands::Pay { plan, method } => {
            let resp = api
                .request(Method::POST, "/api/v1/payment/confirm")?
                .json(&json!({ "plan_id": plan, "method": method }))
                .send()
                .await?;
            print_json(&read::<Value>(resp).await?)?;
        }

        Commands::Project { action } => {
            let req = match action {
                ProjectCommands::Show => api.request(Method::GET, "/api/v1/project")?,
                ProjectCommands::Submit {
                    title,
                    description,
                    application,
                    resources,
                    attachment,
                } => api
                    .request(Method::POST, "/api/v1/project/submit")?
                    .json(&ProjectSubmission {
                        title,
                        description,
                        application,
                        resources,
                        attachment,
                    }),
                ProjectCommands::Review => api.request(Method::POST, "/api/v1/project/review")?,
                ProjectCommands::Complete => {
                    api.request(Method::POST, "/api/v1/project/complete")?
                }
            };
            print_json(&read::<Value>(req.send().await?).await?)?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let args = Cli::parse();

    let api = Api {
        client: Client::new(),
        server: args.server.trim_end_matches('/').to_string(),
        token: args.token,
    };

    if let Err(e) = execute(&api, args.command).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn payment_method_parsing() {
        assert_eq!(parse_method("card"), Ok(PaymentMethod::Card));
        assert_eq!(parse_method("paypal"), Ok(PaymentMethod::Paypal));
        assert!(parse_method("cash").is_err());
    }

    #[test]
    fn requests_need_a_token() {
        let api = Api {
            client: Client::new(),
            server: "http://localhost:5000".to_string(),
            token: None,
        };
        assert!(matches!(
            api.request(Method::GET, "/api/v1/session"),
            Err(CliError::MissingToken)
        ));
    }
}
