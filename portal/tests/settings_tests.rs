use skimap_portal::settings::{
    PASSWORD_MAX, ResetMarker, SETTINGS_IMAGE_SIZE, SSID_MAX, SettingsRecord,
};

#[test]
fn empty_record_has_no_credentials_and_is_disarmed() {
    let record = SettingsRecord::empty();
    assert!(record.ssid_is_empty());
    assert_eq!(record.ssid(), "");
    assert_eq!(record.password(), "");
    assert_eq!(record.reset_marker(), ResetMarker::Disarmed);
}

#[test]
fn credentials_round_trip_through_flash_image() {
    let mut record = SettingsRecord::empty();
    record.set_credentials("Chalet Nord", "hunter2 with spaces");
    record.set_reset_marker(ResetMarker::Armed);

    let image = record.to_image();
    let restored = SettingsRecord::from_image(&image).expect("image should decode");

    assert_eq!(restored.ssid(), "Chalet Nord");
    assert_eq!(restored.password(), "hunter2 with spaces");
    assert_eq!(restored.reset_marker(), ResetMarker::Armed);
}

#[test]
fn empty_strings_are_persisted_verbatim() {
    let mut record = SettingsRecord::empty();
    record.set_credentials("", "");

    let restored = SettingsRecord::from_image(&record.to_image()).unwrap();
    assert!(restored.ssid_is_empty());
    assert_eq!(restored.password(), "");
}

#[test]
fn strings_are_not_trimmed_or_escaped() {
    let mut record = SettingsRecord::empty();
    record.set_credentials("  padded  ", "p@ss<>&\"word");

    let restored = SettingsRecord::from_image(&record.to_image()).unwrap();
    assert_eq!(restored.ssid(), "  padded  ");
    assert_eq!(restored.password(), "p@ss<>&\"word");
}

#[test]
fn oversized_fields_are_cut_at_field_size() {
    let long_ssid = "x".repeat(SSID_MAX + 10);
    let long_password = "y".repeat(PASSWORD_MAX + 10);

    let mut record = SettingsRecord::empty();
    record.set_credentials(&long_ssid, &long_password);

    assert_eq!(record.ssid().len(), SSID_MAX);
    assert_eq!(record.password().len(), PASSWORD_MAX);
}

#[test]
fn erased_flash_reads_back_as_no_settings() {
    // NOR flash erases to 0xFF; a zeroed block is the never-written case.
    assert!(SettingsRecord::from_image(&[0xFF; SETTINGS_IMAGE_SIZE]).is_none());
    assert!(SettingsRecord::from_image(&[0x00; SETTINGS_IMAGE_SIZE]).is_none());
}

#[test]
fn short_image_is_rejected() {
    let record = SettingsRecord::empty();
    let image = record.to_image();
    assert!(SettingsRecord::from_image(&image[..SETTINGS_IMAGE_SIZE - 1]).is_none());
}

#[test]
fn wiping_disarms_the_reset_marker() {
    let mut record = SettingsRecord::empty();
    record.set_credentials("slope", "secret");
    record.set_reset_marker(ResetMarker::Armed);

    // A factory reset stores the empty record in place of the old one.
    record = SettingsRecord::empty();
    assert_eq!(record.reset_marker(), ResetMarker::Disarmed);
    assert!(record.ssid_is_empty());
}
