//! Minimal smoke-test binary: connect, delete any stray ROSpec 0, add and
//! run a short inventory ROSpec, print whatever tag reports arrive, then
//! tear the ROSpec down and close. Same role as the teacher's `main.rs` —
//! kept for parity with its `[[bin]] test_runtime`, not a general-purpose
//! CLI.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use llrp::{Item, Parameter, Session, SessionConfig, SpecRegistry, Value};

#[tokio::main]
async fn main() {
    env_logger::init();

    let registry = match SpecRegistry::load() {
        Ok(r) => Arc::new(r),
        Err(e) => {
            eprintln!("failed to load the spec registry: {e}");
            return;
        }
    };

    let config = SessionConfig {
        host: "192.168.1.102".to_string(),
        port: 5084,
        connect_timeout_ms: 2_500,
        transact_timeout_ms: 2_500,
        max_frame_len: 10 * 1024 * 1024,
        default_rospec: None,
    };

    let session = match Session::connect(Arc::clone(&registry), config).await {
        Ok(s) => s,
        Err(e) => {
            eprintln!("failed to connect to LLRP reader: {e}");
            return;
        }
    };
    println!("connected, session state: {:?}", session.state());

    let rospec_id: u32 = 1;

    if let Err(e) = delete_rospec(&session, 0).await {
        eprintln!("error during DELETE_ROSPEC: {e}");
    }

    if let Err(e) = add_inventory_rospec(&registry, &session, rospec_id).await {
        eprintln!("error during ADD_ROSPEC: {e}");
        return;
    }

    if let Err(e) = enable_rospec(&session, rospec_id).await {
        eprintln!("error during ENABLE_ROSPEC: {e}");
        return;
    }

    let mut unsolicited = session.take_unsolicited_receiver().expect("receiver not yet taken");

    if let Err(e) = start_rospec(&session, rospec_id).await {
        eprintln!("error during START_ROSPEC: {e}");
        return;
    }

    let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
    while tokio::time::Instant::now() < deadline {
        match tokio::time::timeout_at(deadline, unsolicited.recv()).await {
            Ok(Some(msg)) if msg.spec_name == "RO_ACCESS_REPORT" => {
                for report in msg.sub_parameters("TagReportData") {
                    print_tag_report(report);
                }
            }
            Ok(Some(_)) => continue,
            Ok(None) | Err(_) => break,
        }
    }

    if let Err(e) = stop_rospec(&session, rospec_id).await {
        eprintln!("error during STOP_ROSPEC: {e}");
    }

    if let Err(e) = session.close().await {
        eprintln!("error during CLOSE_CONNECTION: {e}");
    }
}

fn print_tag_report(report: &Parameter) {
    let epc = report
        .sub_parameter("EPC96")
        .and_then(|p| p.field("EPC"))
        .or_else(|| report.sub_parameter("EPCData").and_then(|p| p.field("EPC")));
    match epc {
        Some(value) => println!("TagReportData: {value}"),
        None => println!("TagReportData: <no EPC>"),
    }
}

async fn delete_rospec(session: &Session, rospec_id: u32) -> llrp::Result<()> {
    let mut fields = BTreeMap::new();
    fields.insert("ROSpecID", Value::U32(rospec_id));
    session.transact("DELETE_ROSPEC", fields, Vec::new()).await.map(|_| ())
}

async fn enable_rospec(session: &Session, rospec_id: u32) -> llrp::Result<()> {
    let mut fields = BTreeMap::new();
    fields.insert("ROSpecID", Value::U32(rospec_id));
    session.transact("ENABLE_ROSPEC", fields, Vec::new()).await.map(|_| ())
}

async fn start_rospec(session: &Session, rospec_id: u32) -> llrp::Result<()> {
    let mut fields = BTreeMap::new();
    fields.insert("ROSpecID", Value::U32(rospec_id));
    session.transact("START_ROSPEC", fields, Vec::new()).await.map(|_| ())
}

async fn stop_rospec(session: &Session, rospec_id: u32) -> llrp::Result<()> {
    let mut fields = BTreeMap::new();
    fields.insert("ROSpecID", Value::U32(rospec_id));
    session.transact("STOP_ROSPEC", fields, Vec::new()).await.map(|_| ())
}

async fn add_inventory_rospec(registry: &SpecRegistry, session: &Session, rospec_id: u32) -> llrp::Result<()> {
    let start_trigger = Parameter::new(
        registry,
        "ROSpecStartTrigger",
        {
            let mut f = BTreeMap::new();
            f.insert("ROSpecStartTriggerType", Value::Enum { enum_name: "ROSpecStartTriggerType", value: 1 });
            f
        },
        Vec::new(),
    )?;
    let stop_trigger = Parameter::new(
        registry,
        "ROSpecStopTrigger",
        {
            let mut f = BTreeMap::new();
            f.insert("ROSpecStopTriggerType", Value::Enum { enum_name: "ROSpecStopTriggerType", value: 0 });
            f.insert("DurationTriggerValue", Value::U32(0));
            f
        },
        Vec::new(),
    )?;
    let boundary_spec = Parameter::new(
        registry,
        "ROBoundarySpec",
        BTreeMap::new(),
        vec![Item::Parameter(start_trigger), Item::Parameter(stop_trigger)],
    )?;

    let ai_stop_trigger = Parameter::new(
        registry,
        "AISpecStopTrigger",
        {
            let mut f = BTreeMap::new();
            f.insert("AISpecStopTriggerType", Value::Enum { enum_name: "AISpecStopTriggerType", value: 1 });
            f.insert("DurationTriggerValue", Value::U32(5_000));
            f
        },
        Vec::new(),
    )?;
    let inventory_param = Parameter::new(
        registry,
        "InventoryParameterSpec",
        {
            let mut f = BTreeMap::new();
            f.insert("InventoryParameterSpecID", Value::U16(1));
            f.insert("ProtocolID", Value::Enum { enum_name: "AirProtocols", value: 1 });
            f
        },
        Vec::new(),
    )?;
    let ai_spec = Parameter::new(
        registry,
        "AISpec",
        {
            let mut f = BTreeMap::new();
            f.insert("AntennaIDs", Value::U16Array(vec![0]));
            f
        },
        vec![Item::Parameter(ai_stop_trigger), Item::Parameter(inventory_param)],
    )?;

    let content_selector = Parameter::new(
        registry,
        "TagReportContentSelector",
        {
            let mut f = BTreeMap::new();
            f.insert("EnableROSpecID", Value::Bool(false));
            f.insert("EnableSpecIndex", Value::Bool(false));
            f.insert("EnableInventoryParameterSpecID", Value::Bool(false));
            f.insert("EnableAntennaID", Value::Bool(true));
            f.insert("EnableChannelIndex", Value::Bool(false));
            f.insert("EnablePeakRSSI", Value::Bool(true));
            f.insert("EnableFirstSeenTimestamp", Value::Bool(false));
            f.insert("EnableLastSeenTimestamp", Value::Bool(false));
            f.insert("EnableTagSeenCount", Value::Bool(true));
            f
        },
        Vec::new(),
    )?;
    let report_spec = Parameter::new(
        registry,
        "ROReportSpec",
        {
            let mut f = BTreeMap::new();
            f.insert("ROReportTrigger", Value::Enum { enum_name: "ROReportTriggerType", value: 1 });
            f.insert("N", Value::U16(1));
            f
        },
        vec![Item::Parameter(content_selector)],
    )?;

    let rospec = Parameter::new(
        registry,
        "ROSpec",
        {
            let mut f = BTreeMap::new();
            f.insert("ROSpecID", Value::U32(rospec_id));
            f.insert("Priority", Value::U8(0));
            f.insert("CurrentState", Value::Enum { enum_name: "ROSpecState", value: 0 });
            f
        },
        vec![Item::Parameter(boundary_spec), Item::Parameter(ai_spec), Item::Parameter(report_spec)],
    )?;

    session.transact("ADD_ROSPEC", BTreeMap::new(), vec![Item::Parameter(rospec)]).await.map(|_| ())
}
