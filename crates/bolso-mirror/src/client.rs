use chrono::NaiveDateTime;
use reqwest::blocking::{Client as HttpClient, RequestBuilder, Response};
use serde::{Deserialize, Serialize};

use crate::{
    error::MirrorError,
    rows::{ExpenseRow, FixedExpenseRow, GoalRow, ProfileRow},
};

const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// An authenticated mirror session.
#[derive(Debug, Clone, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub user: AuthUser,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

/// Blocking client for the hosted table store.
///
/// Each call is a single request; retries and conflict resolution are left to
/// the caller (local state wins).
pub struct MirrorClient {
    base_url: String,
    api_key: String,
    http: HttpClient,
}

impl MirrorClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self, MirrorError> {
        let http = HttpClient::builder().build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            http,
        })
    }

    // auth

    pub fn sign_up(&self, email: &str, password: &str) -> Result<Session, MirrorError> {
        let request = self
            .http
            .post(format!("{}/auth/v1/signup", self.base_url))
            .json(&Credentials { email, password });
        self.send(self.with_key(request))
    }

    pub fn sign_in(&self, email: &str, password: &str) -> Result<Session, MirrorError> {
        let request = self
            .http
            .post(format!(
                "{}/auth/v1/token?grant_type=password",
                self.base_url
            ))
            .json(&Credentials { email, password });
        let session: Session = self.send(self.with_key(request))?;
        tracing::info!(user = %session.user.id, "mirror session opened");
        Ok(session)
    }

    pub fn sign_out(&self, session: &Session) -> Result<(), MirrorError> {
        let request = self
            .http
            .post(format!("{}/auth/v1/logout", self.base_url))
            .bearer_auth(&session.access_token);
        check(self.with_key(request).send()?)?;
        Ok(())
    }

    pub fn current_user(&self, session: &Session) -> Result<AuthUser, MirrorError> {
        let request = self
            .http
            .get(format!("{}/auth/v1/user", self.base_url))
            .bearer_auth(&session.access_token);
        self.send(self.with_key(request))
    }

    // user_profiles

    pub fn create_profile(
        &self,
        session: &Session,
        row: &ProfileRow,
    ) -> Result<ProfileRow, MirrorError> {
        self.insert("user_profiles", session, row)
    }

    pub fn get_profile(
        &self,
        session: &Session,
        user_id: &str,
    ) -> Result<Option<ProfileRow>, MirrorError> {
        let rows: Vec<ProfileRow> = self.select(
            "user_profiles",
            session,
            &[("id", format!("eq.{user_id}"))],
        )?;
        Ok(rows.into_iter().next())
    }

    pub fn update_profile(
        &self,
        session: &Session,
        user_id: &str,
        row: &ProfileRow,
    ) -> Result<(), MirrorError> {
        let request = self
            .http
            .patch(self.table_url("user_profiles"))
            .query(&[("id", format!("eq.{user_id}"))])
            .json(row);
        check(self.authed(request, session).send()?)?;
        Ok(())
    }

    // fixed_expenses

    pub fn list_fixed_expenses(
        &self,
        session: &Session,
        user_id: &str,
    ) -> Result<Vec<FixedExpenseRow>, MirrorError> {
        self.select(
            "fixed_expenses",
            session,
            &[
                ("user_id", format!("eq.{user_id}")),
                ("order", "created_at.desc".to_string()),
            ],
        )
    }

    pub fn create_fixed_expense(
        &self,
        session: &Session,
        row: &FixedExpenseRow,
    ) -> Result<FixedExpenseRow, MirrorError> {
        self.insert("fixed_expenses", session, row)
    }

    pub fn delete_fixed_expense(&self, session: &Session, id: &str) -> Result<(), MirrorError> {
        self.delete("fixed_expenses", session, id)
    }

    // expenses

    pub fn list_expenses(
        &self,
        session: &Session,
        user_id: &str,
        start: Option<NaiveDateTime>,
        end: Option<NaiveDateTime>,
    ) -> Result<Vec<ExpenseRow>, MirrorError> {
        let mut filters = vec![
            ("user_id", format!("eq.{user_id}")),
            ("order", "date.desc".to_string()),
        ];
        if let Some(start) = start {
            filters.push(("date", format!("gte.{}", start.format(DATE_TIME_FORMAT))));
        }
        if let Some(end) = end {
            filters.push(("date", format!("lte.{}", end.format(DATE_TIME_FORMAT))));
        }
        self.select("expenses", session, &filters)
    }

    pub fn create_expense(
        &self,
        session: &Session,
        row: &ExpenseRow,
    ) -> Result<ExpenseRow, MirrorError> {
        self.insert("expenses", session, row)
    }

    pub fn delete_expense(&self, session: &Session, id: &str) -> Result<(), MirrorError> {
        self.delete("expenses", session, id)
    }

    // goals

    pub fn list_goals(
        &self,
        session: &Session,
        user_id: &str,
    ) -> Result<Vec<GoalRow>, MirrorError> {
        self.select(
            "goals",
            session,
            &[
                ("user_id", format!("eq.{user_id}")),
                ("order", "deadline.asc".to_string()),
            ],
        )
    }

    pub fn create_goal(&self, session: &Session, row: &GoalRow) -> Result<GoalRow, MirrorError> {
        self.insert("goals", session, row)
    }

    pub fn update_goal(
        &self,
        session: &Session,
        id: &str,
        row: &GoalRow,
    ) -> Result<(), MirrorError> {
        let request = self
            .http
            .patch(self.table_url("goals"))
            .query(&[("id", format!("eq.{id}"))])
            .json(row);
        check(self.authed(request, session).send()?)?;
        Ok(())
    }

    pub fn delete_goal(&self, session: &Session, id: &str) -> Result<(), MirrorError> {
        self.delete("goals", session, id)
    }

    // request plumbing

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn with_key(&self, request: RequestBuilder) -> RequestBuilder {
        request.header("apikey", &self.api_key)
    }

    fn authed(&self, request: RequestBuilder, session: &Session) -> RequestBuilder {
        self.with_key(request.bearer_auth(&session.access_token))
    }

    fn send<T: serde::de::DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, MirrorError> {
        let response = check(request.send()?)?;
        let body = response.text()?;
        serde_json::from_str(&body).map_err(|err| MirrorError::Decode(err.to_string()))
    }

    fn select<T: serde::de::DeserializeOwned>(
        &self,
        table: &str,
        session: &Session,
        filters: &[(&str, String)],
    ) -> Result<Vec<T>, MirrorError> {
        let request = self
            .http
            .get(self.table_url(table))
            .query(&[("select", "*")])
            .query(filters);
        self.send(self.authed(request, session))
    }

    /// Inserts one row and returns the stored representation.
    fn insert<T: Serialize + serde::de::DeserializeOwned>(
        &self,
        table: &str,
        session: &Session,
        row: &T,
    ) -> Result<T, MirrorError> {
        let request = self
            .http
            .post(self.table_url(table))
            .header("Prefer", "return=representation")
            .json(&[row]);
        let rows: Vec<T> = self.send(self.authed(request, session))?;
        rows.into_iter().next().ok_or_else(|| {
            MirrorError::Decode(format!("{table}: insert returned no representation"))
        })
    }

    fn delete(&self, table: &str, session: &Session, id: &str) -> Result<(), MirrorError> {
        let request = self
            .http
            .delete(self.table_url(table))
            .query(&[("id", format!("eq.{id}"))]);
        check(self.authed(request, session).send()?)?;
        Ok(())
    }
}

fn check(response: Response) -> Result<Response, MirrorError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response
        .text()
        .unwrap_or_else(|_| "<unreadable body>".to_string());
    Err(MirrorError::Api {
        status: status.as_u16(),
        message,
    })
}
