// ── Name canonicalization ──
//
// Device names follow the RADkit inventory convention (lowercase, only
// `[a-z0-9_-]`). Interface names are expanded from their abbreviated form
// (`Gi1/0/1`) to the long form network automation tooling expects
// (`GigabitEthernet1/0/1`). Both functions are idempotent.

/// Abbreviation → long interface type. Keys are matched case-insensitively;
/// every long form is also listed as its own key.
const INTERFACE_TYPES: &[(&str, &str)] = &[
    // Ethernet family
    ("et", "Ethernet"),
    ("eth", "Ethernet"),
    ("ethernet", "Ethernet"),
    ("fa", "FastEthernet"),
    ("fas", "FastEthernet"),
    ("fastethernet", "FastEthernet"),
    ("ge", "GigabitEthernet"),
    ("gi", "GigabitEthernet"),
    ("gig", "GigabitEthernet"),
    ("gigabitethernet", "GigabitEthernet"),
    ("tw", "TwoGigabitEthernet"),
    ("two", "TwoGigabitEthernet"),
    ("twogigabitethernet", "TwoGigabitEthernet"),
    ("fi", "FiveGigabitEthernet"),
    ("fivegigabitethernet", "FiveGigabitEthernet"),
    ("te", "TenGigabitEthernet"),
    ("ten", "TenGigabitEthernet"),
    ("tengig", "TenGigabitEthernet"),
    ("tengigabitethernet", "TenGigabitEthernet"),
    ("tengige", "TenGigabitEthernet"),
    ("twe", "TwentyFiveGigE"),
    ("twentyfivegige", "TwentyFiveGigE"),
    ("twentyfivegigabitethernet", "TwentyFiveGigE"),
    ("fo", "FortyGigabitEthernet"),
    ("for", "FortyGigabitEthernet"),
    ("fortygig", "FortyGigabitEthernet"),
    ("fortygigabitethernet", "FortyGigabitEthernet"),
    ("fortygige", "FortyGigabitEthernet"),
    ("hu", "HundredGigE"),
    ("hundredgig", "HundredGigE"),
    ("hundredgige", "HundredGigE"),
    ("hundredgigabitethernet", "HundredGigE"),
    ("ap", "AppGigabitEthernet"),
    ("appgigabitethernet", "AppGigabitEthernet"),
    // Logical interfaces
    ("po", "Port-channel"),
    ("port-channel", "Port-channel"),
    ("portchannel", "Port-channel"),
    ("lo", "Loopback"),
    ("loopback", "Loopback"),
    ("vl", "Vlan"),
    ("vlan", "Vlan"),
    ("tu", "Tunnel"),
    ("tunnel", "Tunnel"),
    ("nv", "nve"),
    ("nve", "nve"),
    ("bdi", "BDI"),
    ("virtual-template", "Virtual-Template"),
    ("vt", "Virtual-Template"),
    // Serial and management
    ("se", "Serial"),
    ("ser", "Serial"),
    ("serial", "Serial"),
    ("ma", "Management"),
    ("mgmt", "mgmt"),
    ("management", "Management"),
];

/// Canonical RADkit device name: trimmed, lowercased, and every character
/// outside `[a-z0-9_-]` replaced with `_`.
pub fn canonical_device_name(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}

/// Split an interface name into its type and its numeric tail
/// (`"Gi1/0/1.100"` → `("Gi", "1/0/1.100")`).
pub fn split_interface(raw: &str) -> (&str, &str) {
    let head = raw.trim_end_matches(|c: char| {
        c.is_ascii_digit() || matches!(c, '/' | '\\' | '.' | ' ')
    });
    let tail = raw[head.len()..].trim_start();
    (head, tail)
}

/// Expand an abbreviated interface name to its long form.
///
/// Unknown interface types are returned unchanged (trimmed).
pub fn canonical_interface_name(raw: &str) -> String {
    let trimmed = raw.trim();
    let (head, tail) = split_interface(trimmed);
    if head.is_empty() {
        return trimmed.to_owned();
    }

    INTERFACE_TYPES
        .iter()
        .find(|(abbrev, _)| abbrev.eq_ignore_ascii_case(head))
        .map_or_else(|| trimmed.to_owned(), |(_, long)| format!("{long}{tail}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_name_is_lowercased_and_sanitized() {
        assert_eq!(canonical_device_name("SW1"), "sw1");
        assert_eq!(canonical_device_name("  Core Switch #2 "), "core_switch__2");
        assert_eq!(canonical_device_name("cat9k-1.lab.local"), "cat9k-1_lab_local");
        assert_eq!(canonical_device_name("Zürich"), "z_rich");
    }

    #[test]
    fn device_name_is_idempotent() {
        for raw in ["SW1", "Core Switch #2", "cat9k-1.lab.local", "Zürich", "", "a_b-c"] {
            let once = canonical_device_name(raw);
            assert_eq!(canonical_device_name(&once), once, "input: {raw:?}");
        }
    }

    #[test]
    fn split_interface_separates_type_and_number() {
        assert_eq!(split_interface("Gi1/0/1"), ("Gi", "1/0/1"));
        assert_eq!(split_interface("Gi 1/0/1"), ("Gi", "1/0/1"));
        assert_eq!(split_interface("Port-channel10"), ("Port-channel", "10"));
        assert_eq!(split_interface("Gi1/0/1.100"), ("Gi", "1/0/1.100"));
        assert_eq!(split_interface("12"), ("", "12"));
    }

    #[test]
    fn abbreviations_expand_to_long_form() {
        assert_eq!(canonical_interface_name("Gi1/0/1"), "GigabitEthernet1/0/1");
        assert_eq!(canonical_interface_name("gi1/0/1"), "GigabitEthernet1/0/1");
        assert_eq!(canonical_interface_name("Te1/1/1"), "TenGigabitEthernet1/1/1");
        assert_eq!(canonical_interface_name("Tw1/0/5"), "TwoGigabitEthernet1/0/5");
        assert_eq!(canonical_interface_name("Po1"), "Port-channel1");
        assert_eq!(canonical_interface_name("Vl10"), "Vlan10");
        assert_eq!(canonical_interface_name("Hu1/0/49"), "HundredGigE1/0/49");
    }

    #[test]
    fn long_and_unknown_names_pass_through() {
        assert_eq!(
            canonical_interface_name("GigabitEthernet1/0/1"),
            "GigabitEthernet1/0/1"
        );
        assert_eq!(canonical_interface_name("uplink"), "uplink");
        assert_eq!(canonical_interface_name("12"), "12");
        assert_eq!(canonical_interface_name(""), "");
    }

    #[test]
    fn interface_name_is_idempotent() {
        for raw in ["Gi1/0/1", "te1/1/1", "Po1", "Eth1/1", "uplink", "12", "Gi 1/0/3"] {
            let once = canonical_interface_name(raw);
            assert_eq!(canonical_interface_name(&once), once, "input: {raw:?}");
        }
    }
}
