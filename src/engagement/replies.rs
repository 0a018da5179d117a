use rand::Rng;

use crate::record::template;

/// Courtly acknowledgment lines sent back after a recorded thanks.
pub const REPLY_TEMPLATES: [&str; 5] = [
    "No, I thank you, {name}.",
    "Your gratitude greatly honours this humble fox, {name}.",
    "Foximo bows deeply: your thanks are more precious than gold, {name}.",
    "Your kindness is noted in the royal ledger, {name}.",
    "Ever at your service, {name} – your thanks are warmly received.",
];

/// One reply line, chosen uniformly, rendered with the viewer's name.
pub fn thank_reply<R: Rng>(rng: &mut R, viewer_name: &str) -> String {
    let raw = REPLY_TEMPLATES[rng.gen_range(0..REPLY_TEMPLATES.len())];
    template::render(raw, viewer_name)
}
