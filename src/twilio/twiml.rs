//! Minimal TwiML builder covering the verbs this server emits.

/// A single TwiML verb that knows how to render itself.
pub trait Action {
    fn as_twiml(&self) -> String;
}

fn xml_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders one element. Attribute values are escaped; `inner` is taken as
/// already-rendered TwiML.
pub fn format_xml_string(tag: &str, attrs: &[(&str, &str)], inner: &str) -> String {
    let mut out = String::new();
    out.push('<');
    out.push_str(tag);
    for (name, value) in attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&xml_escape(value));
        out.push('"');
    }
    out.push('>');
    out.push_str(inner);
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
    out
}

/// `<Client>` noun: the registered softphone identity to ring.
pub struct Client {
    pub name: String,
}

impl Action for Client {
    fn as_twiml(&self) -> String {
        format_xml_string("Client", &[], &xml_escape(&self.name))
    }
}

/// `<Dial>` verb connecting the call to a client endpoint.
pub struct Dial {
    pub client: Client,
}

impl Action for Dial {
    fn as_twiml(&self) -> String {
        format_xml_string("Dial", &[], &self.client.as_twiml())
    }
}

/// Top-level `<Response>` document.
#[derive(Default)]
pub struct VoiceResponse {
    body: String,
}

impl VoiceResponse {
    /// An inert document with no instructions. Twilio treats it as a
    /// successful no-op, which keeps the call flow alive.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn add(mut self, action: &dyn Action) -> Self {
        self.body.push_str(&action.as_twiml());
        self
    }

    pub fn to_xml(&self) -> String {
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>{}",
            format_xml_string("Response", &[], &self.body)
        )
    }
}
