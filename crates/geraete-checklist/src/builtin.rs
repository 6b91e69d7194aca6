use geraete_core::models::ChecklistItemDefinition;

/// Items of the refurbished-device check, in display order.
const DEVICE_CHECK: &[(&str, &str, bool)] = &[
    ("boot", "Gerät startet und erreicht Desktop", true),
    ("battery", "Akku lädt und hält Ladung", false),
    ("keyboard", "Tastatur funktioniert", true),
    ("touchpad", "Touchpad/Mouse funktioniert", true),
    ("screen", "Display ohne starke Pixelfehler/Brüche", true),
    ("wifi", "WLAN verbindet stabil", true),
    ("ports", "USB/Netzteil-Port ohne Wackelkontakt", false),
    ("storage", "Speicher/SSD wird erkannt", true),
    (
        "os",
        "Betriebssystem installiert (z. B. Linux), Updates möglich",
        false,
    ),
];

pub fn device_check_items() -> Vec<ChecklistItemDefinition> {
    DEVICE_CHECK
        .iter()
        .map(|&(id, title, required)| ChecklistItemDefinition::new(id, title, required))
        .collect()
}
