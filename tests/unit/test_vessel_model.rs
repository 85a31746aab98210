#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use fleet_management_api::models::{
        CreateVesselRequest, Document, UpdateVesselRequest, Vessel, VesselStatus,
    };
    use serde_json::json;

    fn create_request() -> CreateVesselRequest {
        serde_json::from_value(json!({
            "vesselId": "V100",
            "name": "Ocean Explorer",
            "type": "Container Ship",
            "flag": "Panama",
            "yearBuilt": 2018,
            "grossTonnage": 85000.0,
            "length": 300.0,
            "beam": 40.0,
            "draft": 14.5,
            "status": "Active",
            "currentLocation": {
                "latitude": 25.7617,
                "longitude": -80.1918,
                "portName": "Port of Miami"
            },
            "nextScheduledMaintenance": (Utc::now() + Duration::days(30)).to_rfc3339(),
        }))
        .unwrap()
    }

    #[test]
    fn test_from_create_assigns_server_fields() {
        let now = Utc::now();
        let vessel = Vessel::from_create(create_request(), now);

        assert_eq!(vessel.vessel_id, "V100");
        assert_eq!(vessel.name, "Ocean Explorer");
        assert_eq!(vessel.vessel_type, "Container Ship");
        assert_eq!(vessel.status, VesselStatus::Active);
        assert_eq!(vessel.created_at, now);
        assert_eq!(vessel.updated_at, now);
        assert_eq!(vessel.business_id(), "V100");
        assert_eq!(vessel.record_id(), vessel.id);
        assert_eq!(vessel.vessel_ref(), None);
    }

    #[test]
    fn test_last_maintenance_defaults_to_creation_time() {
        let now = Utc::now();
        let vessel = Vessel::from_create(create_request(), now);
        assert_eq!(vessel.last_maintenance, now);

        let mut request = create_request();
        let serviced = now - Duration::days(90);
        request.last_maintenance = Some(serviced);
        let vessel = Vessel::from_create(request, now);
        assert_eq!(vessel.last_maintenance, serviced);
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let mut vessel = Vessel::from_create(create_request(), Utc::now());
        vessel.status = VesselStatus::InTransit;

        let value = serde_json::to_value(&vessel).unwrap();
        assert_eq!(value["vesselId"], "V100");
        assert_eq!(value["type"], "Container Ship");
        assert_eq!(value["grossTonnage"], 85000.0);
        assert_eq!(value["yearBuilt"], 2018);
        assert_eq!(value["status"], "In Transit");
        assert_eq!(value["currentLocation"]["portName"], "Port of Miami");
        assert!(value.get("vessel_id").is_none());
        assert!(value.get("createdAt").is_some());
    }

    #[test]
    fn test_status_wire_names() {
        for (status, wire) in [
            (VesselStatus::Active, "Active"),
            (VesselStatus::Maintenance, "Maintenance"),
            (VesselStatus::Docked, "Docked"),
            (VesselStatus::InTransit, "In Transit"),
        ] {
            assert_eq!(serde_json::to_value(status).unwrap(), wire);
            assert_eq!(status.as_str(), wire);
            let parsed: VesselStatus = serde_json::from_value(json!(wire)).unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let result: Result<VesselStatus, _> = serde_json::from_value(json!("Sunk"));
        assert!(result.is_err());
    }

    #[test]
    fn test_apply_update_changes_only_provided_fields() {
        let mut vessel = Vessel::from_create(create_request(), Utc::now());

        let patch: UpdateVesselRequest = serde_json::from_value(json!({
            "name": "Ocean Explorer II",
            "status": "Docked"
        }))
        .unwrap();
        vessel.apply_update(patch);

        assert_eq!(vessel.name, "Ocean Explorer II");
        assert_eq!(vessel.status, VesselStatus::Docked);
        assert_eq!(vessel.flag, "Panama");
        assert_eq!(vessel.year_built, 2018);
        assert_eq!(
            vessel.current_location.port_name.as_deref(),
            Some("Port of Miami")
        );
    }

    #[test]
    fn test_update_replaces_location_wholesale() {
        let mut vessel = Vessel::from_create(create_request(), Utc::now());

        let patch: UpdateVesselRequest = serde_json::from_value(json!({
            "currentLocation": { "latitude": 51.9244, "longitude": 4.4777 }
        }))
        .unwrap();
        vessel.apply_update(patch);

        assert_eq!(vessel.current_location.latitude, 51.9244);
        assert_eq!(vessel.current_location.longitude, 4.4777);
        // The omitted port name is dropped, not carried over.
        assert_eq!(vessel.current_location.port_name, None);
    }

    #[test]
    fn test_touch_bumps_updated_at_only() {
        let created = Utc::now();
        let mut vessel = Vessel::from_create(create_request(), created);

        let later = created + Duration::seconds(5);
        vessel.touch(later);

        assert_eq!(vessel.created_at, created);
        assert_eq!(vessel.updated_at, later);
    }

    #[test]
    fn test_create_request_rejects_unknown_fields() {
        let mut body = serde_json::to_value(json!({
            "vesselId": "V100",
            "name": "Ocean Explorer",
            "type": "Container Ship",
            "flag": "Panama",
            "yearBuilt": 2018,
            "grossTonnage": 85000.0,
            "length": 300.0,
            "beam": 40.0,
            "draft": 14.5,
            "status": "Active",
            "currentLocation": { "latitude": 0.0, "longitude": 0.0 },
            "nextScheduledMaintenance": (Utc::now() + Duration::days(30)).to_rfc3339(),
        }))
        .unwrap();
        body["displacement"] = json!(120000.0);

        let result: Result<CreateVesselRequest, _> = serde_json::from_value(body);
        assert!(result.is_err());
    }

    #[test]
    fn test_create_request_requires_location() {
        let body = json!({
            "vesselId": "V100",
            "name": "Ocean Explorer",
            "type": "Container Ship",
            "flag": "Panama",
            "yearBuilt": 2018,
            "grossTonnage": 85000.0,
            "length": 300.0,
            "beam": 40.0,
            "draft": 14.5,
            "status": "Active",
            "nextScheduledMaintenance": (Utc::now() + Duration::days(30)).to_rfc3339(),
        });

        let result: Result<CreateVesselRequest, _> = serde_json::from_value(body);
        assert!(result.is_err());
    }
}
