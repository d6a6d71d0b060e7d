use super::*;

#[test]
fn label_is_trimmed() {
    let label = Label::new("  Sales  ").unwrap();
    assert_eq!(label.as_str(), "Sales");
    assert_eq!(label.to_string(), "Sales");
}

#[test]
fn blank_label_is_rejected() {
    assert!(matches!(Label::new(""), Err(VizError::InvalidLabel(_))));
    assert!(matches!(Label::new(" \t "), Err(VizError::InvalidLabel(_))));
}

#[test]
fn element_id_rejects_blank_and_whitespace() {
    assert_eq!(ElementId::new("chart-div").unwrap().as_str(), "chart-div");
    assert!(matches!(
        ElementId::new("   "),
        Err(VizError::InvalidElementId(_))
    ));
    assert!(matches!(
        ElementId::new("chart div"),
        Err(VizError::InvalidElementId(_))
    ));
}

#[test]
fn ids_serialize_as_plain_strings() {
    let label = Label::try_from("Sales").unwrap();
    assert_eq!(serde_json::to_value(&label).unwrap(), "Sales");
    let id = ElementId::try_from("chart-div").unwrap();
    assert_eq!(serde_json::to_value(&id).unwrap(), "chart-div");
}
