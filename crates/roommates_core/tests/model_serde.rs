use chrono::NaiveDate;
use roommates_core::{Chore, NewChore, NewRoom, Roommate, RoommateChore};

#[test]
fn new_chore_into_chore_keeps_name() {
    let chore = NewChore::new("Dishes").into_chore(7);
    assert_eq!(
        chore,
        Chore {
            id: 7,
            name: "Dishes".to_string(),
        }
    );
}

#[test]
fn new_room_into_room_keeps_fields() {
    let room = NewRoom::new("Attic", 1).into_room(3);
    assert_eq!(room.id, 3);
    assert_eq!(room.name, "Attic");
    assert_eq!(room.max_occupancy, 1);
}

#[test]
fn roommate_serialization_uses_expected_fields() {
    let roommate = Roommate {
        id: 1,
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        rent_portion: 425,
        move_in_date: NaiveDate::from_ymd_opt(2023, 5, 1)
            .unwrap()
            .and_hms_opt(13, 45, 30)
            .unwrap(),
        room_id: None,
    };

    let json = serde_json::to_value(&roommate).unwrap();
    assert_eq!(json["first_name"], "Ada");
    assert_eq!(json["rent_portion"], 425);
    assert_eq!(json["move_in_date"], "2023-05-01T13:45:30");
    assert!(json["room_id"].is_null());

    let decoded: Roommate = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, roommate);
}

#[test]
fn assignment_serialization_uses_expected_fields() {
    let assignment = RoommateChore {
        id: 5,
        roommate_id: 2,
        chore_id: 7,
    };

    let json = serde_json::to_value(assignment).unwrap();
    assert_eq!(json["id"], 5);
    assert_eq!(json["roommate_id"], 2);
    assert_eq!(json["chore_id"], 7);
}
