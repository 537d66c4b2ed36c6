#![allow(dead_code)]

/// Zone configuration as the provider actually sends it: upper-case root,
/// unclosed `result` tags, an unquoted attribute set, a comment and a record
/// left open until its container closes.
pub const PROVIDER_ZONE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<XML>
 <resource_records>
  <soa host="example.com"><result ttl="86400" value="ns1.cotendo.net"></soa>
  <ns host="example.com"><result value="ns1.cotendo.net"><result value="ns2.cotendo.net"></ns>
  <!-- managed records -->
  <txt host="@"><result value="v=spf1 include:_spf.example.com ~all" ttl="3600"></txt>
  <a host="www"><result value="192.0.2.10" ttl="300"><result value="192.0.2.11" ttl="300"></a>
  <cname host="cdn"><result value="example.cotcdn.net" ttl="600"></result></cname>
  <mx host="@"><result value="mx1.example.com" priority="10" ttl="3600"><result value=mx2.example.com priority=20 ttl=3600></mx>
  <a host="api"><result value="192.0.2.20" ttl="60">
 </resource_records>
</XML>
"#;

/// A zone holding nothing but the SOA/NS singletons.
pub const EMPTY_ZONE: &str = r#"<xml><resource_records><soa host="example.com"/><ns host="example.com"/></resource_records></xml>"#;

pub const UNKNOWN_RECORD_ZONE: &str = r#"<xml>
  <resource_records>
    <a host="www"><result value="192.0.2.10"></a>
    <aaaa host="www"><result value="2001:db8::10"></aaaa>
  </resource_records>
</xml>"#;

pub const SRV_ZONE: &str = r#"<xml>
  <resource_records>
    <srv host="_sip._tcp"><result value="sip.example.com" port="5060" weight="5" priority="10"></srv>
    <a host="www"><result value="192.0.2.10"></a>
  </resource_records>
</xml>"#;

pub const CDN_CONFIG: &str = r#"<xml>
  <cdn_entries>
    <origin host="origin.example.com" port=8080>
    <cache ttl="3600"/>
  </cdn_entries>
</xml>"#;

/// Two records of the same type, both left open.
pub const UNCLOSED_SIBLINGS_ZONE: &str = r#"<xml><resource_records><a host="x"><result value="192.0.2.1"><a host="y"><result value="192.0.2.2"></resource_records></xml>"#;
