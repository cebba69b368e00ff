use plc_gateway::mock::{MockClient, MockFactory};
use plc_gateway::{Gateway, OperationLogRoot, Session, SessionConfig, WriteOutcome};

#[tokio::test]
async fn end_to_end_write_then_read_through_a_gateway() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let gateway = Gateway::new(
        MockFactory::returning(MockClient::new()),
        OperationLogRoot::new(tmp.path()),
    );

    let cfg = SessionConfig::new()
        .with_instance_id(0)
        .with_address("127.0.0.1")
        .with_port(502)
        .with_plc_type("MEL_FX5U");
    let mut plc = gateway.open_session(cfg).await.expect("open");
    assert!(plc.connected());
    assert_eq!(plc.endpoint().addr, "127.0.0.1:502");

    assert_eq!(plc.write_int16("D100", 1234).await, WriteOutcome::Success);
    assert_eq!(plc.read_int16("D100").await, Some(1234));
}

#[tokio::test]
async fn failed_connect_yields_a_usable_degraded_session() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let factory = MockFactory::returning(
        MockClient::new().with_fail_connect().with_word("D100", 55),
    );

    let plc = Session::open(SessionConfig::new(), &factory, &OperationLogRoot::new(tmp.path()))
        .await
        .expect("construction completes despite connect failure");
    assert!(!plc.connected());

    // operations still delegate and reflect per-call success; `connected`
    // stays what the open-time attempt said
    let mut plc = plc;
    assert_eq!(plc.read_int16("D100").await, Some(55));
    assert_eq!(plc.write_bool("M1", true).await, WriteOutcome::Success);
    assert!(!plc.connected());
}

#[tokio::test]
async fn independent_sessions_do_not_share_state() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let root = OperationLogRoot::new(tmp.path());
    let factory = MockFactory::returning(MockClient::new());

    let mut a = Session::open(
        SessionConfig::new().with_instance_id(0),
        &factory,
        &root,
    )
    .await
    .expect("open a");
    let mut b = Session::open(
        SessionConfig::new().with_instance_id(1).with_port(5008),
        &factory,
        &root,
    )
    .await
    .expect("open b");

    assert_eq!(a.write_int16("D0", 11).await, WriteOutcome::Success);
    // each session owns its own client; b never sees a's write
    assert_eq!(b.read_int16("D0").await, Some(0));
    assert_eq!(a.read_int16("D0").await, Some(11));
}
