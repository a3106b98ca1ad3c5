// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Landmark extraction through diagnosis, without the HTTP layer

use shoulder_mobility_node::pose::{
    assess_pose, extract_landmarks, BodyPart, DetectedPose, Landmark, MobilityLabel,
};

/// Elbow at 90° on the right and straight on the left
fn bent_right_straight_left() -> DetectedPose {
    DetectedPose::new(0.95)
        .with_landmark(BodyPart::Nose, Landmark::new(0.5, 0.1))
        .with_landmark(BodyPart::RightShoulder, Landmark::new(0.3, 0.3))
        .with_landmark(BodyPart::RightElbow, Landmark::new(0.3, 0.5))
        .with_landmark(BodyPart::RightWrist, Landmark::new(0.5, 0.5))
        .with_landmark(BodyPart::LeftShoulder, Landmark::new(0.7, 0.3))
        .with_landmark(BodyPart::LeftElbow, Landmark::new(0.7, 0.5))
        .with_landmark(BodyPart::LeftWrist, Landmark::new(0.7, 0.7))
}

#[test]
fn test_full_pose_diagnosis() {
    let pose = bent_right_straight_left();
    let landmarks = extract_landmarks(Some(&pose)).expect("all arm landmarks present");

    let result = assess_pose(&landmarks).unwrap();

    assert!((result.right_elbow_angle - 90.0).abs() < 1e-3);
    assert!((result.left_elbow_angle - 180.0).abs() < 1e-3);
    assert!((result.mobility_difference - 90.0).abs() < 1e-3);
    assert_eq!(result.label, MobilityLabel::ReducedRight);
}

#[test]
fn test_no_pose_yields_no_landmarks() {
    assert!(extract_landmarks(None).is_none());
    assert!(extract_landmarks(Some(&DetectedPose::default())).is_none());
}

#[test]
fn test_each_required_part_is_needed() {
    for missing in [
        BodyPart::RightShoulder,
        BodyPart::RightElbow,
        BodyPart::RightWrist,
        BodyPart::LeftShoulder,
        BodyPart::LeftElbow,
        BodyPart::LeftWrist,
    ] {
        let mut pose = bent_right_straight_left();
        pose.landmarks.remove(&missing);
        assert!(
            extract_landmarks(Some(&pose)).is_none(),
            "{} should be required",
            missing.name()
        );
    }
}

#[test]
fn test_collapsed_arm_fails_assessment() {
    let pose = bent_right_straight_left()
        .with_landmark(BodyPart::RightWrist, Landmark::new(0.3, 0.5));
    let landmarks = extract_landmarks(Some(&pose)).unwrap();

    assert!(assess_pose(&landmarks).is_err());
}
