//! Records module tests.

use super::*;
use crate::error_handling::ValidationError;
use std::net::Ipv4Addr;

fn raw(ip: Option<&str>, host: Option<&str>, iface: Option<&str>, domain: Option<&str>) -> RawRecord {
    RawRecord {
        row: 1,
        ip_address: ip.map(String::from),
        device_hostname: host.map(String::from),
        interface_name: iface.map(String::from),
        domain_name: domain.map(String::from),
        ..Default::default()
    }
}

fn defaults() -> NormalizeOptions {
    NormalizeOptions::default()
}

#[test]
fn test_build_ptr_reverses_octets() {
    assert_eq!(
        build_ptr(Ipv4Addr::new(192, 168, 1, 10)),
        "10.1.168.192.in-addr.arpa"
    );
    assert_eq!(build_ptr(Ipv4Addr::new(10, 0, 0, 5)), "5.0.0.10.in-addr.arpa");
}

#[test]
fn test_device_row_uses_default_domain() {
    let record = build_record(
        &raw(Some("10.0.0.5"), Some("sw01"), None, None),
        "example.com",
        &defaults(),
    )
    .unwrap();
    assert_eq!(record.fqdn, "sw01.example.com");
    assert_eq!(record.ptr, "5.0.0.10.in-addr.arpa");
    assert_eq!(record.ip, Ipv4Addr::new(10, 0, 0, 5));
    assert_eq!(record.interface, None);
}

#[test]
fn test_interface_row_prefixes_interface_label() {
    let record = build_record(
        &raw(Some("10.0.0.5"), Some("sw01"), Some("gi0/1"), None),
        "example.com",
        &defaults(),
    )
    .unwrap();
    assert_eq!(record.fqdn, "gi0-1.sw01.example.com");
    assert_eq!(record.interface.as_deref(), Some("gi0-1"));
}

#[test]
fn test_hostname_is_lowercased() {
    let fqdn = build_fqdn("CoreRTR01", None, "example.com", &defaults()).unwrap();
    assert_eq!(fqdn, "corertr01.example.com");

    let fqdn = build_fqdn("CoreRTR01", Some("Vlan10"), "example.com", &defaults()).unwrap();
    assert_eq!(fqdn, "vlan10.corertr01.example.com");
}

#[test]
fn test_row_domain_overrides_default() {
    let record = build_record(
        &raw(Some("10.1.1.1"), Some("fw01"), None, Some("Branch.Example.NET.")),
        "example.com",
        &defaults(),
    )
    .unwrap();
    assert_eq!(record.fqdn, "fw01.branch.example.net");
}

#[test]
fn test_blank_domain_falls_back_to_default() {
    assert_eq!(
        normalize_domain(Some("   "), "example.com").unwrap(),
        "example.com"
    );
    assert_eq!(normalize_domain(None, "Example.com.").unwrap(), "example.com");
}

#[test]
fn test_invalid_domain_rejected() {
    for bad in ["exa mple.com", "example..com", "-bad.com", "bad-.com", "ex_ample.com"] {
        assert!(
            matches!(
                normalize_domain(Some(bad), "example.com"),
                Err(ValidationError::InvalidDomain(_))
            ),
            "{bad} should be rejected"
        );
    }
    assert!(normalize_domain(None, "").is_err());
}

#[test]
fn test_normalize_hostname_rules() {
    assert_eq!(normalize_hostname("  SW01  ").unwrap(), "sw01");
    assert_eq!(normalize_hostname("sw01.corp.local").unwrap(), "sw01");
    assert_eq!(normalize_hostname("core_sw__01").unwrap(), "core-sw-01");
    assert_eq!(normalize_hostname("edge---rtr").unwrap(), "edge-rtr");
    assert_eq!(normalize_hostname("_lab(sw)#1_").unwrap(), "labsw1");
    assert_eq!(normalize_hostname("Zürich-01").unwrap(), "zrich-01");
}

#[test]
fn test_normalize_hostname_rejects_empty_and_long_labels() {
    assert!(matches!(
        normalize_hostname("***"),
        Err(ValidationError::InvalidHostname(_))
    ));
    assert!(matches!(
        normalize_hostname(".corp.local"),
        Err(ValidationError::InvalidHostname(_))
    ));
    let long = "a".repeat(64);
    assert!(normalize_hostname(&long).is_err());
    assert!(normalize_hostname(&"a".repeat(63)).is_ok());
}

#[test]
fn test_normalize_interface_maps_separators() {
    let opts = defaults();
    assert_eq!(normalize_interface("Gi0/1.100", &opts).unwrap(), "gi0-1-100");
    assert_eq!(normalize_interface("Serial0/0/0:1", &opts).unwrap(), "serial0-0-0-1");
    assert_eq!(
        normalize_interface("GigabitEthernet1/0/24", &opts).unwrap(),
        "gigabitethernet1-0-24"
    );
    assert!(matches!(
        normalize_interface("///", &opts),
        Err(ValidationError::InvalidInterface(_))
    ));
}

#[test]
fn test_abbreviated_interfaces() {
    let opts = NormalizeOptions {
        abbreviate_interfaces: true,
    };
    assert_eq!(normalize_interface("GigabitEthernet0/1", &opts).unwrap(), "gi0-1");
    assert_eq!(normalize_interface("TenGigabitEthernet1/1/1", &opts).unwrap(), "te1-1-1");
    assert_eq!(normalize_interface("Port-channel10", &opts).unwrap(), "po10");
    assert_eq!(normalize_interface("Vlan200", &opts).unwrap(), "vl200");
    assert_eq!(normalize_interface("Loopback0", &opts).unwrap(), "lo0");
    assert_eq!(normalize_interface("BVI", &opts).unwrap(), "bv");
    // Unknown types pass through unchanged
    assert_eq!(normalize_interface("mgmt0", &opts).unwrap(), "mgmt0");
    assert_eq!(normalize_interface("gi0/1", &opts).unwrap(), "gi0-1");
}

#[test]
fn test_abbreviate_interface_on_clean_label() {
    assert_eq!(abbreviate_interface("fastethernet0-1"), "fa0-1");
    assert_eq!(abbreviate_interface("vlan-10"), "vl10");
    assert_eq!(abbreviate_interface("0-1"), "0-1");
}

#[test]
fn test_parse_ipv4_errors() {
    assert_eq!(parse_ipv4(None), Err(ValidationError::MissingIpAddress));
    assert_eq!(parse_ipv4(Some("  ")), Err(ValidationError::MissingIpAddress));
    assert_eq!(
        parse_ipv4(Some("10.0.0.256")),
        Err(ValidationError::InvalidIpAddress("10.0.0.256".into()))
    );
    assert_eq!(
        parse_ipv4(Some("fe80::1")),
        Err(ValidationError::NotIpv4("fe80::1".into()))
    );
    assert_eq!(parse_ipv4(Some(" 10.0.0.1 ")), Ok(Ipv4Addr::new(10, 0, 0, 1)));
}

#[test]
fn test_missing_required_fields_rejected() {
    let no_ip = build_record(&raw(None, Some("sw01"), None, None), "example.com", &defaults());
    assert_eq!(no_ip, Err(ValidationError::MissingIpAddress));

    let no_host = build_record(&raw(Some("10.0.0.1"), None, None, None), "example.com", &defaults());
    assert_eq!(no_host, Err(ValidationError::MissingHostname));
}

#[test]
fn test_fqdn_length_limit() {
    let long_domain = std::iter::repeat("a".repeat(60))
        .take(4)
        .collect::<Vec<_>>()
        .join(".");
    let result = build_fqdn("sw01", Some("gi0/1"), &long_domain, &defaults());
    assert!(matches!(result, Err(ValidationError::FqdnTooLong(_))));
}

#[test]
fn test_read_records_trims_and_blanks() {
    let data = "ip_address,device_hostname,interface_name,domain_name\n\
                10.0.0.5 , SW01 ,,\n\
                10.0.0.6,sw02,Gi0/1,corp.example.com\n";
    let records = read_records(data.as_bytes()).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].row, 1);
    assert_eq!(records[0].ip_address.as_deref(), Some("10.0.0.5"));
    assert_eq!(records[0].device_hostname.as_deref(), Some("SW01"));
    assert_eq!(records[0].interface_name, None);
    assert_eq!(records[0].domain_name, None);
    assert_eq!(records[1].row, 2);
    assert_eq!(records[1].interface_name.as_deref(), Some("Gi0/1"));
    assert_eq!(records[1].domain_name.as_deref(), Some("corp.example.com"));
}

#[test]
fn test_read_records_optional_columns_absent() {
    let data = "device_hostname,ip_address,site\nsw01,10.0.0.1,HQ\nsw02\n";
    let records = read_records(data.as_bytes()).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].ip_address.as_deref(), Some("10.0.0.1"));
    assert_eq!(records[0].interface_name, None);
    assert_eq!(records[1].device_hostname.as_deref(), Some("sw02"));
    assert_eq!(records[1].ip_address, None);
}

#[test]
fn test_read_records_accepts_domain_alias() {
    let data = "ip_address,device_hostname,domain\n10.0.0.1,sw01,lab.example.com\n";
    let records = read_records(data.as_bytes()).unwrap();
    assert_eq!(records[0].domain_name.as_deref(), Some("lab.example.com"));
}

#[test]
fn test_read_records_prefers_domain_name_over_domain() {
    let data = "ip_address,device_hostname,domain,domain_name\n\
                10.0.0.1,sw01,old.example.com,new.example.com\n\
                10.0.0.2,sw02,old.example.com,\n";
    let records = read_records(data.as_bytes()).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].domain_name.as_deref(), Some("new.example.com"));
    // A blank domain_name cell falls back to the default domain, not to `domain`
    assert_eq!(records[1].domain_name, None);
}

#[test]
fn test_read_records_tolerates_ragged_rows() {
    let data = "ip_address,device_hostname,interface_name\n\
                10.0.0.1\n\
                10.0.0.2,sw02,gi0/2,extra,cells\n\
                \n\
                10.0.0.3,sw03\n";
    let records = read_records(data.as_bytes()).unwrap();
    assert_eq!(records.len(), 3);

    assert_eq!(records[0].ip_address.as_deref(), Some("10.0.0.1"));
    assert_eq!(records[0].device_hostname, None);
    assert_eq!(records[1].interface_name.as_deref(), Some("gi0/2"));
    assert_eq!(records[2].row, 3);
    assert_eq!(records[2].device_hostname.as_deref(), Some("sw03"));
    assert_eq!(records[2].interface_name, None);

    let short = build_record(&records[0], "example.com", &defaults());
    assert_eq!(short, Err(ValidationError::MissingHostname));
}

#[test]
fn test_read_records_marks_non_utf8_cell_on_its_row_only() {
    let mut data = b"ip_address,device_hostname\n10.0.0.1,sw01\n10.0.0.2,Z".to_vec();
    data.push(0xFC); // Latin-1 'u' with diaeresis
    data.extend_from_slice(b"rich\n10.0.0.3,sw03\n");

    let records = read_records(data.as_slice()).unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].invalid_utf8_column, None);
    assert_eq!(records[1].invalid_utf8_column, Some("device_hostname"));
    assert_eq!(records[1].device_hostname.as_deref(), Some("Z\u{FFFD}rich"));
    assert_eq!(records[2].invalid_utf8_column, None);

    let error = build_record(&records[1], "example.com", &defaults()).unwrap_err();
    assert_eq!(
        error,
        ValidationError::InvalidEncoding("device_hostname".to_string())
    );
    let rejected = RejectedRecord::new(&records[1], &error);
    assert_eq!(rejected.ip_address.as_deref(), Some("10.0.0.2"));
    assert_eq!(rejected.error, "device_hostname is not valid UTF-8");

    assert!(build_record(&records[2], "example.com", &defaults()).is_ok());
}

#[test]
fn test_read_records_requires_columns() {
    let err = read_records("hostname,ip\nsw01,10.0.0.1\n".as_bytes()).unwrap_err();
    assert!(err.to_string().contains("ip_address"));
}

#[test]
fn test_rejected_record_keeps_raw_values() {
    let row = RawRecord {
        row: 7,
        ..raw(Some("10.0.0"), Some("sw01"), None, None)
    };
    let error = build_record(&row, "example.com", &defaults()).unwrap_err();
    let rejected = RejectedRecord::new(&row, &error);
    assert_eq!(rejected.row, 7);
    assert_eq!(rejected.ip_address.as_deref(), Some("10.0.0"));
    assert!(rejected.error.contains("not a valid IPv4 address"));
}
