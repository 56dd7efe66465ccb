use std::collections::HashMap;

use axum::http::StatusCode;
use axum_test::TestServer;
use learnpath::{build_server_with_store, model::SessionStore};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tower_cookies::Cookie;

pub async fn setup_server() -> TestServer {
    setup_server_with_store(SessionStore::new()).await
}

/// Same as [`setup_server`], but the caller keeps a handle on the store.
pub async fn setup_server_with_store(store: SessionStore) -> TestServer {
    let server = build_server_with_store(store).await.unwrap().1;
    TestServer::new(server).unwrap()
}

#[derive(Debug)]
pub struct FlowContext {
    pub store: HashMap<&'static str, Value>, // a way to pass data between steps
}

impl FlowContext {
    pub fn new() -> Self {
        Self {
            store: HashMap::new(),
        }
    }

    pub fn store(&mut self, key: &'static str, val: Value) {
        self.store.insert(key, val);
    }

    pub fn get(&self, key: &str) -> &Value {
        self.store.get(key).expect("missing store key")
    }

    #[allow(unused)]
    pub fn get_json<T>(&self, key: &str) -> T
    where
        T: DeserializeOwned,
    {
        let obj = self.get(key);
        serde_json::from_value(obj.clone()).expect("Invalid json format")
    }
}

pub struct Action {
    #[allow(unused)]
    pub name: &'static str,
    pub method: &'static str,
    pub path: String,
    pub dyn_path: Option<Box<dyn Fn(&FlowContext) -> String + Send + Sync>>,
    pub body: Option<Value>,
    pub expect: StatusCode,
    pub clear_cookies: bool,
    pub save_cookies: bool,
    pub cookie_asserts: Vec<(&'static str, Box<dyn Fn(&Cookie) + Send + Sync>)>,
    pub body_asserts: Vec<Box<dyn Fn(&str) + Send + Sync>>,
    pub save_as: Option<&'static str>,
}

impl Action {
    pub fn new(name: &'static str, method: &'static str, path: &str) -> Self {
        Self {
            name,
            method,
            path: path.to_string(),
            dyn_path: None,
            body: None,
            expect: StatusCode::OK,
            clear_cookies: false,
            save_cookies: true,
            cookie_asserts: vec![],
            body_asserts: vec![],
            save_as: None,
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_expect(mut self, expect: StatusCode) -> Self {
        self.expect = expect;
        self
    }

    #[allow(unused)]
    pub fn with_save_cookies(mut self, save_cookies: bool) -> Self {
        self.save_cookies = save_cookies;
        self
    }

    #[allow(unused)]
    pub fn with_clear_cookies(mut self, clear_cookies: bool) -> Self {
        self.clear_cookies = clear_cookies;
        self
    }

    #[allow(unused)]
    pub fn with_dyn_path<F>(mut self, f: F) -> Self
    where
        F: Fn(&FlowContext) -> String + Send + Sync + 'static,
    {
        self.dyn_path = Some(Box::new(f));
        self
    }

    #[allow(unused)]
    pub fn with_save_as(mut self, key: &'static str) -> Self {
        self.save_as = Some(key);
        self
    }

    #[allow(unused)]
    pub fn assert_cookie<F>(mut self, name: &'static str, check: F) -> Self
    where
        F: Fn(&Cookie) + Send + Sync + 'static,
    {
        self.cookie_asserts.push((name, Box::new(check)));
        self
    }

    pub fn assert_body<F>(mut self, check: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.body_asserts.push(Box::new(check));
        self
    }
}

pub struct Flow {
    actions: Vec<Action>,
}

impl Flow {
    pub fn new() -> Self {
        Self { actions: vec![] }
    }

    pub fn step(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    pub async fn run(self, server: &mut TestServer) {
        let mut ctx = FlowContext::new(); // create new context for this flow
        for action in self.actions {
            println!("==> Running test action `{}`", action.name);
            if action.clear_cookies {
                server.clear_cookies();
            }

            if action.save_cookies {
                server.save_cookies();
            } else {
                server.do_not_save_cookies();
            }

            let path = if let Some(dyn_path_fn) = action.dyn_path {
                dyn_path_fn(&ctx)
            } else {
                action.path.clone()
            };

            let mut req = match action.method {
                "GET" => server.get(&path),
                "POST" => server.post(&path),
                "PUT" => server.put(&path),
                "DELETE" => server.delete(&path),
                _ => panic!("unsupported method {}", action.method),
            };

            if let Some(json) = action.body {
                req = req.json(&json);
            }

            let resp = req.await;
            resp.assert_status(action.expect);
            let cookies = resp.cookies();

            for (cookie_name, check) in action.cookie_asserts {
                let cookie = cookies
                    .get(cookie_name)
                    .unwrap_or_else(|| panic!("Cookie {} is not set", cookie_name));
                check(cookie);
            }

            if !action.body_asserts.is_empty() {
                let body = resp.json::<Value>();
                let body = serde_json::to_string(&body)
                    .unwrap_or_else(|_| panic!("Unable to serialize body to string"));
                for check in action.body_asserts {
                    check(&body);
                }
            }

            if let Some(save_key) = action.save_as {
                let body = resp.json::<Value>();
                ctx.store(save_key, body);
            }
        }
    }
}

// Common actions builders

pub fn start_session_action() -> Action {
    Action::new("start_session", "POST", "/api/v1/session/start").with_expect(StatusCode::CREATED)
}

#[allow(unused)]
pub fn complete_module_action(module_id: &str) -> Action {
    Action::new(
        "complete_module",
        "POST",
        &format!("/api/v1/path/modules/{module_id}/complete"),
    )
}

#[allow(unused)]
pub fn confirm_payment_action(plan_id: &str, method: &str) -> Action {
    Action::new("confirm_payment", "POST", "/api/v1/payment/confirm").with_body(json!({
        "plan_id": plan_id,
        "method": method,
    }))
}

#[allow(unused)]
pub fn submit_diagnostic_action() -> Action {
    Action::new("submit_diagnostic", "PUT", "/api/v1/diagnostic").with_body(json!({
        "name": "  Ana  ",
        "years_experience": 6,
        "industry": "finance",
        "skills": ["data_analysis", "data_analysis", "project_management"],
        "goals": ["integrate_in_current_role"],
        "budget": "medium",
    }))
}

#[allow(unused)]
pub fn submit_project_action(title: &str) -> Action {
    Action::new("submit_project", "POST", "/api/v1/project/submit").with_body(json!({
        "title": title,
        "description": "Forecasting cash flow with gradient boosting",
        "application": "Monthly treasury planning",
        "resources": "Python, pandas, LightGBM",
        "attachment": "forecast.zip",
    }))
}

/// Completes every module up to (and including) `last`, in path order.
#[allow(unused)]
pub fn complete_until(mut flow: Flow, last: usize) -> Flow {
    for n in 1..=last {
        flow = flow.step(complete_module_action(&format!("m{n}")));
    }
    flow
}
