//! `mailto:` link for the "Email Me This List" action.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::ChecklistError;

pub const MAIL_SUBJECT: &str = "My Symptom Checklist";

const LINE_BREAK: &str = "\r\n";

/// Characters left unescaped in a mailto query component.
const MAIL_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Dash-prefixed labels joined by CRLF.
pub fn symptom_list<S: AsRef<str>>(labels: &[S]) -> String {
    labels
        .iter()
        .map(|label| format!("- {}", label.as_ref()))
        .collect::<Vec<_>>()
        .join(LINE_BREAK)
}

/// Plain-text mail body embedding the symptom list.
pub fn mail_body<S: AsRef<str>>(labels: &[S]) -> String {
    format!(
        "Hello,{br}{br}I have been tracking my health and wanted to discuss the following symptoms at my next visit:{br}{br}{list}{br}{br}Thank you.",
        br = LINE_BREAK,
        list = symptom_list(labels)
    )
}

pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, MAIL_COMPONENT).to_string()
}

pub fn decode_component(value: &str) -> Result<String, ChecklistError> {
    percent_decode_str(value)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|err| ChecklistError::Encoding(err.to_string()))
}

/// Full `mailto:` link with an empty recipient.
pub fn mailto_link<S: AsRef<str>>(labels: &[S]) -> String {
    format!(
        "mailto:?subject={}&body={}",
        encode_component(MAIL_SUBJECT),
        encode_component(&mail_body(labels))
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_is_dash_prefixed_and_crlf_joined() {
        assert_eq!(
            symptom_list(&["Persistent Itching", "History of HPV"]),
            "- Persistent Itching\r\n- History of HPV"
        );
    }

    #[test]
    fn link_escapes_line_breaks_and_reserved_characters() {
        let link = mailto_link(&["Bleeding (Thought it was hemorrhoids?)"]);
        assert!(link.starts_with("mailto:?subject=My%20Symptom%20Checklist&body=Hello%2C%0D%0A"));
        assert!(!link.contains('\r'));
        assert!(!link.contains('\n'));
        assert!(link.contains("Bleeding%20%28Thought%20it%20was%20hemorrhoids%3F%29"));
        assert_eq!(link.matches('?').count(), 1);
    }

    #[test]
    fn body_decodes_back() {
        let body = mail_body(&["Changes in Bowel Habits", "History of HPV"]);
        assert_eq!(decode_component(&encode_component(&body)).unwrap(), body);
    }
}
