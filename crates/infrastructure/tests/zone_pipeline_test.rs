mod helpers;

use cotendo_dns_application::{CotendoCdn, CotendoDns, MarkupCodec, RecordChange};
use cotendo_dns_domain::{
    DomainError, ProviderResponse, RecordData, RecordType, ResultEntry, ZoneConfig, ZoneRecord,
};
use cotendo_dns_infrastructure::LenientMarkupCodec;
use std::sync::Arc;

fn codec() -> Arc<dyn MarkupCodec> {
    Arc::new(LenientMarkupCodec::default())
}

fn load(config: &str) -> CotendoDns {
    CotendoDns::new(ProviderResponse::new("token-1", config), codec()).unwrap()
}

fn keys(dns: &CotendoDns) -> Vec<(RecordType, String)> {
    dns.entries()
        .iter()
        .map(|record| (record.record_type(), record.host().to_string()))
        .collect()
}

#[test]
fn test_provider_zone_is_extracted_and_sorted() {
    let dns = load(helpers::PROVIDER_ZONE);

    assert_eq!(dns.token(), "token-1");
    assert_eq!(
        keys(&dns),
        vec![
            (RecordType::A, "api".to_string()),
            (RecordType::A, "www".to_string()),
            (RecordType::Cname, "cdn".to_string()),
            (RecordType::Mx, "@".to_string()),
            (RecordType::Txt, "@".to_string()),
        ]
    );

    let mx = dns.get_record(RecordType::Mx, "@").unwrap();
    assert_eq!(mx.results().len(), 2);
    assert_eq!(mx.results()[1].priority(), Some(20));
    assert_eq!(mx.results()[1].value(), Some("mx2.example.com"));

    let txt = dns.get_record(RecordType::Txt, "@").unwrap();
    assert_eq!(
        txt.results()[0].value(),
        Some("v=spf1 include:_spf.example.com ~all")
    );
}

#[test]
fn test_unclosed_same_type_siblings_are_both_kept() {
    let dns = load(helpers::UNCLOSED_SIBLINGS_ZONE);

    assert_eq!(
        keys(&dns),
        vec![
            (RecordType::A, "x".to_string()),
            (RecordType::A, "y".to_string()),
        ]
    );
    let y = dns.get_record(RecordType::A, "y").unwrap();
    assert_eq!(y.results()[0].value(), Some("192.0.2.2"));

    let reloaded = load(&dns.config().unwrap());
    assert_eq!(reloaded.entries(), dns.entries());
}

#[test]
fn test_config_round_trips_record_set() {
    let dns = load(helpers::PROVIDER_ZONE);

    let config = dns.config().unwrap();
    let reloaded = load(&config);

    assert_eq!(reloaded.entries(), dns.entries());
}

#[test]
fn test_config_writes_placeholders_before_records() {
    let dns = load(helpers::PROVIDER_ZONE);
    let config = dns.config().unwrap();

    assert!(config.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<xml>\n"));
    let soa = config.find("<soa host=\"@\"/>").unwrap();
    let ns = config.find("<ns host=\"@\"/>").unwrap();
    let first_record = config.find("<a host=\"api\">").unwrap();
    assert!(soa < ns && ns < first_record);
    assert!(!config.contains("ns1.cotendo.net"));
}

#[test]
fn test_config_uses_configured_placeholder_hosts() {
    let options = ZoneConfig {
        soa_host: "example.com".to_string(),
        ns_host: "example.com".to_string(),
        ..ZoneConfig::default()
    };
    let dns = CotendoDns::with_options(
        ProviderResponse::new("t", helpers::EMPTY_ZONE),
        codec(),
        options,
    )
    .unwrap();

    let config = dns.config().unwrap();
    assert!(config.contains("<soa host=\"example.com\"/>"));
    assert!(config.contains("<ns host=\"example.com\"/>"));
}

#[test]
fn test_add_www_record_to_empty_zone() {
    let mut dns = load(helpers::EMPTY_ZONE);
    assert!(dns.is_empty());

    let record = CotendoDns::create_record(
        "a",
        "www",
        [ResultEntry::new().with("value", "1.2.3.4").with("ttl", "300")],
    )
    .unwrap();
    assert_eq!(dns.add_record(record), RecordChange::Added);

    let config = dns.config().unwrap();
    let expected = concat!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n",
        "<xml>\n",
        "  <resource_records>\n",
        "    <soa host=\"@\"/>\n",
        "    <ns host=\"@\"/>\n",
        "    <a host=\"www\">\n",
        "      <result ttl=\"300\" value=\"1.2.3.4\"/>\n",
        "    </a>\n",
        "  </resource_records>\n",
        "</xml>\n",
    );
    assert_eq!(config, expected);
}

#[test]
fn test_upper_case_result_keys_round_trip() {
    let mut dns = load(helpers::EMPTY_ZONE);
    let record = CotendoDns::create_record(
        "a",
        "www",
        [ResultEntry::new().with("VALUE", "1.2.3.4").with("TTL", "300")],
    )
    .unwrap();
    assert_eq!(
        record.results()[0],
        ResultEntry::new().with("value", "1.2.3.4").with("ttl", "300")
    );
    dns.add_record(record.clone());

    let reloaded = load(&dns.config().unwrap());
    assert_eq!(reloaded.get_record(RecordType::A, "www"), Some(&record));
}

#[test]
fn test_result_key_that_cannot_be_written_is_rejected() {
    for key in ["1st", "two words", ""] {
        let result = CotendoDns::create_record(
            "a",
            "www",
            [ResultEntry::new().with("value", "1.2.3.4").with(key, "a")],
        );
        assert!(
            matches!(result, Err(DomainError::InvalidResultKey(_))),
            "key {key:?} should be rejected"
        );
    }
}

#[test]
fn test_config_refuses_unwritable_key_instead_of_dropping_it() {
    let mut dns = load(helpers::EMPTY_ZONE);
    dns.add_record(ZoneRecord::new(
        RecordType::A,
        RecordData::new(
            "www",
            vec![ResultEntry::new().with("value", "1.2.3.4").with("1st", "a")],
        ),
    ));

    assert!(matches!(dns.config(), Err(DomainError::EncodeFailed(_))));
}

#[test]
fn test_update_then_delete_survives_round_trip() {
    let mut dns = load(helpers::PROVIDER_ZONE);

    let replacement = CotendoDns::create_record(
        "a",
        "www",
        [ResultEntry::new().with("value", "198.51.100.7").with("ttl", "120")],
    )
    .unwrap();
    assert_eq!(dns.add_record(replacement.clone()), RecordChange::Updated);
    assert!(dns.del_record(RecordType::Cname, "cdn").is_some());

    let reloaded = load(&dns.config().unwrap());
    assert_eq!(reloaded.get_record(RecordType::A, "www"), Some(&replacement));
    assert!(reloaded.get_record(RecordType::Cname, "cdn").is_none());
    assert_eq!(reloaded.len(), 4);
}

#[test]
fn test_diff_against_decoded_record() {
    let dns = load(helpers::PROVIDER_ZONE);
    let candidate = CotendoDns::create_record(
        "a",
        "www",
        [
            ResultEntry::new().with("value", "192.0.2.11").with("ttl", "300"),
            ResultEntry::new().with("value", "192.0.2.12").with("ttl", "300"),
        ],
    )
    .unwrap();

    let diff = dns.diff_record(&candidate).unwrap();
    assert_eq!(
        diff.removed.into_iter().collect::<Vec<_>>(),
        vec![ResultEntry::new().with("value", "192.0.2.10").with("ttl", "300")]
    );
    assert_eq!(
        diff.added.into_iter().collect::<Vec<_>>(),
        vec![ResultEntry::new().with("value", "192.0.2.12").with("ttl", "300")]
    );
}

#[test]
fn test_srv_records_dropped_unless_retained() {
    let dns = load(helpers::SRV_ZONE);
    assert_eq!(keys(&dns), vec![(RecordType::A, "www".to_string())]);

    let options = ZoneConfig {
        retain_srv: true,
        ..ZoneConfig::default()
    };
    let dns = CotendoDns::with_options(
        ProviderResponse::new("t", helpers::SRV_ZONE),
        codec(),
        options,
    )
    .unwrap();
    let srv = dns.get_record(RecordType::Srv, "_sip._tcp").unwrap();
    assert_eq!(srv.results()[0].port(), Some(5060));
    assert!(dns.config().unwrap().contains("<srv host=\"_sip._tcp\">"));
}

#[test]
fn test_unknown_record_type_fails_construction() {
    let result = CotendoDns::new(
        ProviderResponse::new("t", helpers::UNKNOWN_RECORD_ZONE),
        codec(),
    );

    assert!(matches!(
        result,
        Err(DomainError::UnknownRecordType(tag)) if tag == "aaaa"
    ));
}

#[test]
fn test_unparseable_config_fails_construction() {
    for config in ["", "maintenance", "<xml/>"] {
        let result = CotendoDns::new(ProviderResponse::new("t", config), codec());
        assert!(
            matches!(result, Err(DomainError::MalformedConfig(_))),
            "config {config:?} should be rejected"
        );
    }
}

#[test]
fn test_cdn_entries_are_re_encoded() {
    let cdn = CotendoCdn::new(ProviderResponse::new("cdn-token", helpers::CDN_CONFIG), codec())
        .unwrap();

    assert_eq!(cdn.token(), "cdn-token");
    assert_eq!(cdn.document().first_element().unwrap().tag, "cdn_entries");

    let entries = cdn.entries().unwrap();
    assert!(entries.contains("<origin host=\"origin.example.com\" port=\"8080\">"));
    assert!(entries.contains("<cache ttl=\"3600\"/>"));
}
