use crate::domain::value::{Channel, Module};

/// In-progress SMS message: everything `api/v1/send` needs except credentials.
///
/// Fields are unvalidated; validation runs on every encode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub module: Module,
    pub channel: Channel,
    pub sender_id: String,
    pub content: String,
    pub template: String,
    pub destinations: Vec<String>,
}

impl Draft {
    pub fn new(channel: Channel) -> Self {
        Self {
            module: Module::Sms,
            channel,
            sender_id: String::new(),
            content: String::new(),
            template: String::new(),
            destinations: Vec::new(),
        }
    }

    /// Clear message fields; module and channel are kept.
    pub fn clear(&mut self) {
        self.sender_id.clear();
        self.content.clear();
        self.template.clear();
        self.destinations.clear();
    }
}
