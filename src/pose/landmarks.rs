// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Body landmark types and extraction of the arm landmarks used for diagnosis

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::geometry::Point2D;

/// Pose landmark identifiers (33 total, BlazePose topology)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum BodyPart {
    Nose = 0,
    LeftEyeInner = 1,
    LeftEye = 2,
    LeftEyeOuter = 3,
    RightEyeInner = 4,
    RightEye = 5,
    RightEyeOuter = 6,
    LeftEar = 7,
    RightEar = 8,
    MouthLeft = 9,
    MouthRight = 10,
    LeftShoulder = 11,
    RightShoulder = 12,
    LeftElbow = 13,
    RightElbow = 14,
    LeftWrist = 15,
    RightWrist = 16,
    LeftPinky = 17,
    RightPinky = 18,
    LeftIndex = 19,
    RightIndex = 20,
    LeftThumb = 21,
    RightThumb = 22,
    LeftHip = 23,
    RightHip = 24,
    LeftKnee = 25,
    RightKnee = 26,
    LeftAnkle = 27,
    RightAnkle = 28,
    LeftHeel = 29,
    RightHeel = 30,
    LeftFootIndex = 31,
    RightFootIndex = 32,
}

impl BodyPart {
    pub const COUNT: usize = 33;

    pub const ALL: [BodyPart; Self::COUNT] = [
        BodyPart::Nose,
        BodyPart::LeftEyeInner,
        BodyPart::LeftEye,
        BodyPart::LeftEyeOuter,
        BodyPart::RightEyeInner,
        BodyPart::RightEye,
        BodyPart::RightEyeOuter,
        BodyPart::LeftEar,
        BodyPart::RightEar,
        BodyPart::MouthLeft,
        BodyPart::MouthRight,
        BodyPart::LeftShoulder,
        BodyPart::RightShoulder,
        BodyPart::LeftElbow,
        BodyPart::RightElbow,
        BodyPart::LeftWrist,
        BodyPart::RightWrist,
        BodyPart::LeftPinky,
        BodyPart::RightPinky,
        BodyPart::LeftIndex,
        BodyPart::RightIndex,
        BodyPart::LeftThumb,
        BodyPart::RightThumb,
        BodyPart::LeftHip,
        BodyPart::RightHip,
        BodyPart::LeftKnee,
        BodyPart::RightKnee,
        BodyPart::LeftAnkle,
        BodyPart::RightAnkle,
        BodyPart::LeftHeel,
        BodyPart::RightHeel,
        BodyPart::LeftFootIndex,
        BodyPart::RightFootIndex,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            BodyPart::Nose => "NOSE",
            BodyPart::LeftEyeInner => "LEFT_EYE_INNER",
            BodyPart::LeftEye => "LEFT_EYE",
            BodyPart::LeftEyeOuter => "LEFT_EYE_OUTER",
            BodyPart::RightEyeInner => "RIGHT_EYE_INNER",
            BodyPart::RightEye => "RIGHT_EYE",
            BodyPart::RightEyeOuter => "RIGHT_EYE_OUTER",
            BodyPart::LeftEar => "LEFT_EAR",
            BodyPart::RightEar => "RIGHT_EAR",
            BodyPart::MouthLeft => "MOUTH_LEFT",
            BodyPart::MouthRight => "MOUTH_RIGHT",
            BodyPart::LeftShoulder => "LEFT_SHOULDER",
            BodyPart::RightShoulder => "RIGHT_SHOULDER",
            BodyPart::LeftElbow => "LEFT_ELBOW",
            BodyPart::RightElbow => "RIGHT_ELBOW",
            BodyPart::LeftWrist => "LEFT_WRIST",
            BodyPart::RightWrist => "RIGHT_WRIST",
            BodyPart::LeftPinky => "LEFT_PINKY",
            BodyPart::RightPinky => "RIGHT_PINKY",
            BodyPart::LeftIndex => "LEFT_INDEX",
            BodyPart::RightIndex => "RIGHT_INDEX",
            BodyPart::LeftThumb => "LEFT_THUMB",
            BodyPart::RightThumb => "RIGHT_THUMB",
            BodyPart::LeftHip => "LEFT_HIP",
            BodyPart::RightHip => "RIGHT_HIP",
            BodyPart::LeftKnee => "LEFT_KNEE",
            BodyPart::RightKnee => "RIGHT_KNEE",
            BodyPart::LeftAnkle => "LEFT_ANKLE",
            BodyPart::RightAnkle => "RIGHT_ANKLE",
            BodyPart::LeftHeel => "LEFT_HEEL",
            BodyPart::RightHeel => "RIGHT_HEEL",
            BodyPart::LeftFootIndex => "LEFT_FOOT_INDEX",
            BodyPart::RightFootIndex => "RIGHT_FOOT_INDEX",
        }
    }
}

/// Body side, from the subject's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Right,
    Left,
}

impl Side {
    pub fn shoulder(self) -> BodyPart {
        match self {
            Side::Right => BodyPart::RightShoulder,
            Side::Left => BodyPart::LeftShoulder,
        }
    }

    pub fn elbow(self) -> BodyPart {
        match self {
            Side::Right => BodyPart::RightElbow,
            Side::Left => BodyPart::LeftElbow,
        }
    }

    pub fn wrist(self) -> BodyPart {
        match self {
            Side::Right => BodyPart::RightWrist,
            Side::Left => BodyPart::LeftWrist,
        }
    }
}

/// The six landmarks the mobility diagnosis needs
pub const REQUIRED_PARTS: [BodyPart; 6] = [
    BodyPart::RightShoulder,
    BodyPart::RightElbow,
    BodyPart::RightWrist,
    BodyPart::LeftShoulder,
    BodyPart::LeftElbow,
    BodyPart::LeftWrist,
];

/// A single landmark as reported by the pose detector
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// Normalized horizontal coordinate
    pub x: f32,
    /// Normalized vertical coordinate
    pub y: f32,
    /// Relative depth, 0.0 when the model has none
    pub z: f32,
    /// Visibility or keypoint score (0.0-1.0)
    pub visibility: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            z: 0.0,
            visibility: 1.0,
        }
    }

    pub fn with_visibility(mut self, visibility: f32) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn point(&self) -> Point2D {
        Point2D::new(self.x as f64, self.y as f64)
    }
}

/// Landmarks found for the single person in an image
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetectedPose {
    pub landmarks: HashMap<BodyPart, Landmark>,
    /// Overall pose confidence (0.0-1.0)
    pub score: f32,
}

impl DetectedPose {
    pub fn new(score: f32) -> Self {
        Self {
            landmarks: HashMap::new(),
            score,
        }
    }

    pub fn with_landmark(mut self, part: BodyPart, landmark: Landmark) -> Self {
        self.landmarks.insert(part, landmark);
        self
    }

    pub fn get(&self, part: BodyPart) -> Option<&Landmark> {
        self.landmarks.get(&part)
    }

    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }
}

/// Shoulder, elbow and wrist of one arm
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArmLandmarks {
    pub shoulder: Point2D,
    pub elbow: Point2D,
    pub wrist: Point2D,
}

/// The six required arm landmarks, reduced to 2D points
///
/// Only constructed through `extract_landmarks`, so every required part is
/// always present.
#[derive(Debug, Clone, PartialEq)]
pub struct LandmarkSet {
    points: HashMap<BodyPart, Point2D>,
}

impl LandmarkSet {
    pub fn get(&self, part: BodyPart) -> Option<Point2D> {
        self.points.get(&part).copied()
    }

    pub fn arm(&self, side: Side) -> ArmLandmarks {
        ArmLandmarks {
            shoulder: self.points[&side.shoulder()],
            elbow: self.points[&side.elbow()],
            wrist: self.points[&side.wrist()],
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Pull the six arm landmarks out of a detector result
///
/// Returns `None` when no pose was detected or when any required landmark is
/// missing. Depth and visibility are dropped and coordinates are passed
/// through without range checks.
pub fn extract_landmarks(pose: Option<&DetectedPose>) -> Option<LandmarkSet> {
    let pose = pose?;
    if pose.is_empty() {
        return None;
    }

    let points = REQUIRED_PARTS
        .iter()
        .map(|&part| pose.get(part).map(|lm| (part, lm.point())))
        .collect::<Option<HashMap<_, _>>>()?;

    Some(LandmarkSet { points })
}
