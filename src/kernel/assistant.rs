//! Assistant conversation: transcript plus in-flight request tickets.

use std::fmt;

use crate::kernel::projects::ProjectsState;
use crate::kernel::services::ports::AssistantRequest;
use crate::models::FileTree;

pub const BACKEND_ERROR_TEXT: &str = "Backend error.";

/// Captures what was current when a request was issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantTicket {
    pub id: u64,
    pub project: Option<String>,
    pub generation: u64,
}

impl AssistantTicket {
    /// A ticket is live while its project is still the current one and has
    /// not been re-selected since the request went out.
    pub fn is_live(&self, projects: &ProjectsState) -> bool {
        self.project.as_deref() == projects.current_project()
            && self.generation == projects.generation()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatLine {
    pub role: ChatRole,
    pub text: String,
    pub stale: bool,
}

impl fmt::Display for ChatLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let who = match self.role {
            ChatRole::User => "You",
            ChatRole::Assistant => "Copilot",
        };
        if self.stale {
            write!(f, "{who} (stale): {}", self.text)
        } else {
            write!(f, "{who}: {}", self.text)
        }
    }
}

#[derive(Debug, Default)]
pub struct AssistantState {
    next_ticket: u64,
    in_flight: Vec<AssistantTicket>,
    transcript: Vec<ChatLine>,
}

impl AssistantState {
    pub fn transcript(&self) -> &[ChatLine] {
        &self.transcript
    }

    pub fn in_flight(&self) -> &[AssistantTicket] {
        &self.in_flight
    }

    /// Records the prompt and builds the request against the current working
    /// copy. Returns `None` for an empty prompt.
    pub fn begin_request(
        &mut self,
        prompt: &str,
        projects: &ProjectsState,
    ) -> Option<(AssistantTicket, AssistantRequest)> {
        if prompt.is_empty() {
            return None;
        }

        self.push(ChatRole::User, prompt, false);

        self.next_ticket += 1;
        let ticket = AssistantTicket {
            id: self.next_ticket,
            project: projects.current_project().map(str::to_string),
            generation: projects.generation(),
        };
        let files = match ticket.project {
            Some(_) => projects.working_copy().clone(),
            None => FileTree::new(),
        };
        let request = AssistantRequest {
            prompt: prompt.to_string(),
            project_name: ticket.project.clone(),
            files,
        };

        self.in_flight.push(ticket.clone());
        Some((ticket, request))
    }

    /// Removes and returns the ticket for a finished request.
    pub fn finish(&mut self, ticket_id: u64) -> Option<AssistantTicket> {
        let index = self.in_flight.iter().position(|t| t.id == ticket_id)?;
        Some(self.in_flight.remove(index))
    }

    pub fn push_reply(&mut self, text: &str, stale: bool) {
        self.push(ChatRole::Assistant, text, stale);
    }

    pub fn push_backend_error(&mut self) {
        self.push(ChatRole::Assistant, BACKEND_ERROR_TEXT, false);
    }

    fn push(&mut self, role: ChatRole, text: &str, stale: bool) {
        self.transcript.push(ChatLine {
            role,
            text: text.to_string(),
            stale,
        });
    }
}
