//! Gradle `repository(...)` statements for the publication target of a
//! generated Android container.
//!
//! The rendered text is embedded verbatim in `build.gradle`, so the grammar
//! must stay character-for-character stable:
//!
//! ```text
//! repository(url: "http://domain.name:8081/repositories") { authentication(userName: "myUser", password: "myPassword") }
//! repository(url: "http://domain.name:8081/repositories") { authentication(userName: myUserVar, password: myPasswordVar) }
//! repository(url: "http://domain.name:8081/repositories")
//! ```

use crate::credentials::{Credential, MavenCredentials};
use crate::types::RepositoryType;

/// Builds the repository statement for `url`.
///
/// Returns `None` when the URL is neither an http nor a file repository.
pub fn target_repository_statement(url: &str, credentials: &MavenCredentials) -> Option<String> {
    match RepositoryType::classify(url) {
        RepositoryType::File => Some(format!(
            "repository(url: \"{}\")",
            escape_backslashes(url)
        )),
        RepositoryType::Http => Some(format!(
            "repository(url: \"{url}\") {}",
            authentication_block(credentials)
        )),
        RepositoryType::Unknown => None,
    }
}

/// Windows paths need every backslash doubled inside a Groovy string.
fn escape_backslashes(url: &str) -> String {
    url.replace('\\', "\\\\")
}

fn authentication_block(credentials: &MavenCredentials) -> String {
    let user = credentials.user();
    let password = credentials.password();

    let has_variable = user.as_ref().is_some_and(Credential::is_variable_ref)
        || password.as_ref().is_some_and(Credential::is_variable_ref);

    if has_variable {
        // Both fields are emitted unquoted, literals included.
        format!(
            "{{ authentication(userName: {}, password: {}) }}",
            user.as_ref().map_or("", Credential::unwrapped),
            password.as_ref().map_or("", Credential::unwrapped),
        )
    } else if user.is_some() || password.is_some() {
        format!(
            "{{ authentication(userName: \"{}\", password: \"{}\") }}",
            credentials.user.as_deref().unwrap_or_default(),
            credentials.password.as_deref().unwrap_or_default(),
        )
    } else {
        String::new()
    }
}
