// ── Tag vocabulary ──
//
// Reset-method and connectivity tags are free-form strings in the
// catalog. Known tags get a display label; unknown ones are shown as-is.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// The two tag dimensions a device can be filtered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagKind {
    #[strum(serialize = "reset method")]
    ResetMethod,
    #[strum(serialize = "connectivity")]
    Connectivity,
}

/// Human-readable label for a tag.
pub fn tag_label(tag: &str) -> &str {
    match tag {
        "botao" => "Botão",
        "interface" => "Interface",
        "padrao" => "Padrão de fábrica",
        "magnetico" => "Magnético",
        "tamper" => "Tamper",
        "software" => "Software",
        "suporte" => "Suporte",
        "wifi" => "Wi-Fi",
        "cabo" => "Cabo",
        "ethernet" => "Ethernet",
        "poe" => "PoE",
        "rs485" => "RS-485",
        "usb" => "USB",
        "wiegand" => "Wiegand",
        "standalone" => "Stand-alone",
        "autônomo" => "Autônomo",
        other => other,
    }
}
