//! Default consent page shown by `GET /login`.

use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

use crate::auth::ConsentChallenge;

/// Renders a form that posts the challenge back to `POST /token`.
pub fn render(challenge: &ConsentChallenge) -> String {
    let state = challenge
        .state
        .as_deref()
        .map(|state| {
            format!(
                r#"<input type="hidden" name="state" value="{}">"#,
                attr(state)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width,initial-scale=1">
<title>Link your account</title>
</head>
<body>
<h2>Link your account</h2>
<p><strong>{client_name}</strong> is requesting access to your account.</p>
<form method="POST" action="/token">
<input type="hidden" name="client_id" value="{client_id}">
<input type="hidden" name="redirect_uri" value="{redirect_uri}">
{state}
<button type="submit" name="action" value="approve">Approve</button>
<button type="submit" name="action" value="deny">Deny</button>
</form>
</body>
</html>"#,
        client_name = text(&challenge.client_id.0),
        client_id = attr(&challenge.client_id.0),
        redirect_uri = attr(challenge.redirect_uri.as_str()),
        state = state,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::ClientId;

    fn challenge(state: Option<&str>) -> ConsentChallenge {
        ConsentChallenge {
            client_id: ClientId("alexa-button-skill".to_string()),
            redirect_uri: "https://example.com/cb".parse().expect("uri"),
            state: state.map(str::to_string),
        }
    }

    #[test]
    fn carries_request_parameters_as_hidden_fields() {
        let html = render(&challenge(Some("xyz")));

        assert!(html.contains(r#"name="client_id" value="alexa-button-skill""#));
        assert!(html.contains(r#"name="redirect_uri" value="https://example.com/cb""#));
        assert!(html.contains(r#"name="state" value="xyz""#));
        assert!(html.contains(r#"action="/token""#));
    }

    #[test]
    fn omits_state_when_absent() {
        let html = render(&challenge(None));
        assert!(!html.contains(r#"name="state""#));
    }

    #[test]
    fn escapes_state() {
        let html = render(&challenge(Some(r#""><script>alert(1)</script>"#)));
        assert!(!html.contains("<script>"));
    }
}
