use dbflow_domain::{Credential, DatabaseInstance, DnsBinding, DomainError, Host, HostAttr, Volume};

#[test]
fn host_requires_address() {
    let err = Host::new("h1", "db-1.example", "  ").unwrap_err();
    assert!(matches!(err, DomainError::ValidationError(_)));
}

#[test]
fn host_binding_exposes_hostname_and_future_host() {
    let mut host = Host::new("h1", "db-1.example", "10.0.0.1").unwrap().with_future_host("h2");
    assert_eq!(<Host as DnsBinding>::KIND, "host");
    assert_eq!(host.dns(), "db-1.example");
    assert_eq!(host.equivalent(), Some("h2"));

    host.set_dns("10.0.0.1".to_string());
    assert_eq!(host.hostname, "10.0.0.1");
}

#[test]
fn instance_binding_uses_dns_field() {
    let inst = DatabaseInstance::new("i1", "h1", "10.0.0.1", 3306, "mysql.example").unwrap()
                                                                                   .with_future_instance("i2");
    assert_eq!(<DatabaseInstance as DnsBinding>::KIND, "instance");
    assert_eq!(inst.key(), "i1");
    assert_eq!(inst.dns(), "mysql.example");
    assert_eq!(inst.equivalent(), Some("i2"));
}

#[test]
fn new_volume_is_active_and_rejects_empty_identifier() {
    let vol = Volume::new("h1", "vol-123", 1024).unwrap();
    assert!(vol.is_active);
    assert_eq!(vol.identifier(), "vol-123");
    assert!(Volume::new("h1", "", 1024).is_err());
}

#[test]
fn secrets_are_masked_in_debug_output() {
    let attr = HostAttr::new("vm-1", "root", "s3cret");
    let cred = Credential::new("svc", "t0ken", "http://storage.local/", "proj");
    assert!(!format!("{attr:?}").contains("s3cret"));
    assert!(!format!("{cred:?}").contains("t0ken"));
    assert_eq!(cred.endpoint, "http://storage.local");
}
