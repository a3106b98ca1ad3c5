// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Shared fixtures for the HTTP tests

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request},
    response::Response,
};
use image::{DynamicImage, ImageFormat, RgbImage};
use mockall::mock;
use shoulder_mobility_node::pose::{BodyPart, DetectedPose, Landmark};
use std::io::Cursor;

pub const BOUNDARY: &str = "----shoulder-mobility-boundary";

mock! {
    pub PoseDetector {}

    impl shoulder_mobility_node::vision::PoseDetector for PoseDetector {
        fn detect(&mut self, image: &DynamicImage) -> anyhow::Result<Option<DetectedPose>>;
        fn model_name(&self) -> String;
    }
}

/// Mock detector that always answers with `pose`
pub fn detector_returning(pose: Option<DetectedPose>) -> MockPoseDetector {
    let mut detector = MockPoseDetector::new();
    detector
        .expect_model_name()
        .return_const("mock-pose".to_string());
    detector
        .expect_detect()
        .returning(move |_| Ok(pose.clone()));
    detector
}

/// One multipart part: (field name, optional filename, contents)
pub type Part<'a> = (&'a str, Option<&'a str>, &'a [u8]);

pub fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, filename, data) in parts {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        match filename {
            Some(filename) => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                        name, filename
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
            }
            None => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name)
                        .as_bytes(),
                );
            }
        }
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

pub fn procesar_request(parts: &[Part<'_>]) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/procesar")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(multipart_body(parts)))
        .unwrap()
}

pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, image::Rgb([90, 120, 150])));
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .unwrap();
    buf
}

pub async fn json_body(response: Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Pose whose right elbow bends to `right_deg` and left elbow to `left_deg`
///
/// Upper arms hang straight up from the elbow; forearms are rotated away
/// from them by the requested angle.
pub fn pose_with_elbow_angles(right_deg: f32, left_deg: f32) -> DetectedPose {
    fn arm(pose: DetectedPose, elbow_x: f32, angle_deg: f32, parts: [BodyPart; 3]) -> DetectedPose {
        let [shoulder, elbow, wrist] = parts;
        let (ex, ey) = (elbow_x, 0.5);
        let theta = angle_deg.to_radians();
        pose.with_landmark(shoulder, Landmark::new(ex, ey - 0.2))
            .with_landmark(elbow, Landmark::new(ex, ey))
            .with_landmark(
                wrist,
                Landmark::new(ex + 0.2 * theta.sin(), ey - 0.2 * theta.cos()),
            )
    }

    let pose = DetectedPose::new(0.9);
    let pose = arm(
        pose,
        0.3,
        right_deg,
        [BodyPart::RightShoulder, BodyPart::RightElbow, BodyPart::RightWrist],
    );
    arm(
        pose,
        0.7,
        left_deg,
        [BodyPart::LeftShoulder, BodyPart::LeftElbow, BodyPart::LeftWrist],
    )
}
