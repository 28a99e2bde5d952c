use crate::domain::browser::{ComplaintBrowser, StatusFilter};
use crate::domain::complaint::{self, ComplaintStatus};
use crate::domain::form::{ComplaintForm, Field, SubmitError};
use crate::errors::ServerError;
use crate::responses::{css_response, html_response, html_response_with_status, redirect, ResultResp};
use crate::state::State;
use crate::templates::{self, Notice};
use astra::Request;
use std::collections::HashMap;
use std::io::Read;
use tracing::{debug, info, warn};
use url::form_urlencoded;

const MAX_FORM_BYTES: u64 = 64 * 1024;

const MAIN_CSS: &str = include_str!("../static/main.css");

pub fn handle(req: Request, state: &State) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    debug!(%method, %path, "request");

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => html_response(templates::pages::home_page()),
        ("GET", "/static/main.css") => css_response(MAIN_CSS),

        ("GET", "/submit") => html_response(templates::pages::submit_page(&ComplaintForm::new(), None)),
        ("POST", "/submit") => submit_complaint(req, state),

        ("GET", "/complaints") => view_complaints(&req, state, false),
        ("GET", "/complaints/reset") => view_complaints(&req, state, true),

        ("POST", p) => match status_change_target(p) {
            Some(id) => change_status(req, state, id),
            None => Err(ServerError::NotFound),
        },

        _ => Err(ServerError::NotFound),
    }
}

fn submit_complaint(req: Request, state: &State) -> ResultResp {
    let fields = parse_form_body(req)?;

    let mut form = ComplaintForm::new();
    for f in Field::ALL {
        form.set_field(f, field(&fields, f.as_str()));
    }

    match form.submit(&state.store) {
        Ok(created) => {
            state.simulate_delay();
            info!(id = %created.id, kind = %created.kind, "complaint submitted");
            redirect("/complaints?notice=submitted")
        }
        Err(SubmitError::Invalid(errors)) => {
            debug!(invalid_fields = errors.len(), "complaint rejected");
            let notice = Notice::error(
                "Por favor, corrija os erros no formulário.",
                Some("Todos os campos são obrigatórios."),
            );
            html_response_with_status(422, templates::pages::submit_page(&form, Some(&notice)))
        }
        Err(SubmitError::InFlight) => Err(ServerError::BadRequest("submission already in progress".into())),
        Err(SubmitError::Store(e)) => {
            warn!(error = %e, "complaint not saved");
            let notice = Notice::error("Erro ao enviar denúncia", Some("Tente novamente mais tarde."));
            html_response_with_status(500, templates::pages::submit_page(&form, Some(&notice)))
        }
    }
}

/// The list view. With `reset`, the incoming filters are applied and then
/// cleared, so the page comes back unfiltered.
fn view_complaints(req: &Request, state: &State, reset: bool) -> ResultResp {
    let params = parse_query(req);

    state.simulate_delay();
    let (mut browser, load_error) = ComplaintBrowser::hydrate(&state.store);

    let filter = params
        .get("status")
        .and_then(|s| s.parse::<StatusFilter>().ok())
        .unwrap_or_default();
    browser.set_status_filter(filter);
    browser.set_search_term(params.get("q").cloned().unwrap_or_default());
    if reset {
        browser.reset_filters();
    }

    let notice = match load_error {
        Some(_) => Some(Notice::error("Erro ao carregar denúncias", Some("Tente recarregar a página."))),
        None => params.get("notice").and_then(|n| notice_for(n)),
    };

    let vm = templates::pages::ComplaintsVm {
        browser: &browser,
        notice,
        now: complaint::now(),
    };
    html_response(templates::pages::complaints_page(&vm))
}

fn change_status(req: Request, state: &State, id: String) -> ResultResp {
    let fields = parse_form_body(req)?;

    let status: ComplaintStatus = fields
        .get("status")
        .ok_or_else(|| ServerError::BadRequest("missing status".into()))?
        .parse()
        .map_err(ServerError::BadRequest)?;

    let (mut browser, _) = ComplaintBrowser::hydrate(&state.store);
    let notice = match browser.change_status(&state.store, &id, status) {
        Ok(true) => Some(format!("status_{}", status.as_str())),
        Ok(false) => None,
        Err(e) => {
            warn!(error = %e, %id, "status change not saved");
            Some("update_failed".to_string())
        }
    };

    let filter = fields
        .get("filter")
        .and_then(|s| s.parse::<StatusFilter>().ok())
        .unwrap_or_default();

    let mut query = form_urlencoded::Serializer::new(String::new());
    if filter != StatusFilter::All {
        query.append_pair("status", filter.as_str());
    }
    if let Some(q) = fields.get("q").filter(|q| !q.trim().is_empty()) {
        query.append_pair("q", q);
    }
    if let Some(notice) = &notice {
        query.append_pair("notice", notice);
    }

    let query = query.finish();
    if query.is_empty() {
        redirect("/complaints")
    } else {
        redirect(&format!("/complaints?{query}"))
    }
}

/// `/complaints/{id}/status` -> `id`
fn status_change_target(path: &str) -> Option<String> {
    let id = path.strip_prefix("/complaints/")?.strip_suffix("/status")?;
    if id.is_empty() || id.contains('/') {
        return None;
    }
    Some(id.to_string())
}

fn notice_for(code: &str) -> Option<Notice> {
    if code == "submitted" {
        return Some(Notice::success(
            "Denúncia enviada com sucesso!",
            Some("Obrigado por contribuir com a cidade."),
        ));
    }
    if code == "update_failed" {
        return Some(Notice::error("Erro ao atualizar status", Some("Tente novamente mais tarde.")));
    }

    let status: ComplaintStatus = code.strip_prefix("status_")?.parse().ok()?;
    Some(Notice::success(status.changed_message(), None))
}

fn field(fields: &HashMap<String, String>, key: &str) -> String {
    fields.get(key).cloned().unwrap_or_default()
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

fn parse_form_body(req: Request) -> Result<HashMap<String, String>, ServerError> {
    let mut body = req.into_body();
    let mut bytes = Vec::new();
    body.reader()
        .take(MAX_FORM_BYTES + 1)
        .read_to_end(&mut bytes)
        .map_err(|e| ServerError::BadRequest(format!("unreadable body: {e}")))?;

    if bytes.len() as u64 > MAX_FORM_BYTES {
        return Err(ServerError::BadRequest(format!(
            "form body over {MAX_FORM_BYTES} bytes"
        )));
    }

    Ok(form_urlencoded::parse(&bytes).into_owned().collect())
}
