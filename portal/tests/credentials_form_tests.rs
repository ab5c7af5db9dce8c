use skimap_portal::form::CredentialsForm;
use skimap_portal::settings::SettingsRecord;

#[test]
fn both_fields_decode() {
    let form = CredentialsForm::parse(b"ssid=chalet&password=snow123");
    assert_eq!(form.ssid, "chalet");
    assert_eq!(form.password, "snow123");
}

#[test]
fn field_order_does_not_matter() {
    let form = CredentialsForm::parse(b"password=snow123&ssid=chalet");
    assert_eq!(form.ssid, "chalet");
    assert_eq!(form.password, "snow123");
}

#[test]
fn missing_fields_coerce_to_empty_strings() {
    let form = CredentialsForm::parse(b"ssid=chalet");
    assert_eq!(form.ssid, "chalet");
    assert_eq!(form.password, "");

    let form = CredentialsForm::parse(b"");
    assert_eq!(form.ssid, "");
    assert_eq!(form.password, "");
}

#[test]
fn empty_values_are_accepted() {
    let form = CredentialsForm::parse(b"ssid=&password=");
    assert_eq!(form.ssid, "");
    assert_eq!(form.password, "");
}

#[test]
fn plus_and_percent_escapes_decode() {
    let form = CredentialsForm::parse(b"ssid=Skimap+setup&password=a%26b%3Dc%20d");
    assert_eq!(form.ssid, "Skimap setup");
    assert_eq!(form.password, "a&b=c d");
}

#[test]
fn malformed_escapes_pass_through_literally() {
    let form = CredentialsForm::parse(b"ssid=100%&password=%zz");
    assert_eq!(form.ssid, "100%");
    assert_eq!(form.password, "%zz");
}

#[test]
fn unknown_fields_are_ignored() {
    let form = CredentialsForm::parse(b"resort=alps&ssid=chalet&submit=Save");
    assert_eq!(form.ssid, "chalet");
    assert_eq!(form.password, "");
}

#[test]
fn submission_round_trips_into_the_settings_record() {
    // End-to-end fidelity: form body -> record -> flash image -> strings.
    let form = CredentialsForm::parse(b"ssid=G%C3%BCggel+5GHz&password=");
    let mut record = SettingsRecord::empty();
    record.set_credentials(&form.ssid, &form.password);

    let restored = SettingsRecord::from_image(&record.to_image()).unwrap();
    assert_eq!(restored.ssid(), "Güggel 5GHz");
    assert_eq!(restored.password(), "");
}
