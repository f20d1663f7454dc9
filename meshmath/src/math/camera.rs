use crate::math::*;

// OpenGL conventions throughout: right-handed eye space looking down -Z,
// NDC z in [-1, 1], window z in [0, 1].
impl Mat44 {
    /// View matrix for a camera at `eye` looking at `center`.
    /// `up` must not be parallel to `eye - center`, otherwise the result is NaN.
    pub fn look_at(eye: Vec3, center: Vec3, up: Vec3) -> Mat44 {
        let z = (eye - center).normalized();
        let x = cross(up, z).normalized();
        let y = cross(z, x).normalized();

        Mat44([
            x.x,
            y.x,
            z.x,
            0.0, //
            x.y,
            y.y,
            z.y,
            0.0, //
            x.z,
            y.z,
            z.z,
            0.0, //
            -dot(eye, x),
            -dot(eye, y),
            -dot(eye, z),
            1.0,
        ])
    }

    pub fn frustum(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat44 {
        let x_diff = right - left;
        let y_diff = top - bottom;
        let z_diff = far - near;
        let a = (right + left) / x_diff;
        let b = (top + bottom) / y_diff;
        let c = -(far + near) / z_diff;
        let d = -(2.0 * far * near) / z_diff;

        Mat44([
            2.0 * near / x_diff,
            0.0,
            0.0,
            0.0, //
            0.0,
            2.0 * near / y_diff,
            0.0,
            0.0, //
            a,
            b,
            c,
            -1.0, //
            0.0,
            0.0,
            d,
            0.0,
        ])
    }

    // Z: [-1, 1]
    // near -> -1
    // far  -> +1
    /// `fov_y` is the full vertical field of view in radians. Requires
    /// `0 < near < far`, which is not checked.
    pub fn perspective(fov_y: f32, aspect_ratio: f32, near: f32, far: f32) -> Mat44 {
        let top = near * (fov_y * 0.5).tan();
        let right = top * aspect_ratio;
        Mat44::frustum(-right, right, -top, top, near, far)
    }

    pub fn ortho(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat44 {
        let x_diff = right - left;
        let y_diff = top - bottom;
        let z_diff = far - near;

        Mat44([
            2.0 / x_diff,
            0.0,
            0.0,
            0.0, //
            0.0,
            2.0 / y_diff,
            0.0,
            0.0, //
            0.0,
            0.0,
            -2.0 / z_diff,
            0.0, //
            -(right + left) / x_diff,
            -(top + bottom) / y_diff,
            -(far + near) / z_diff,
            1.0,
        ])
    }
}

/// Maps an object-space point to window coordinates.
/// `viewport` is `(x, y, width, height)`.
pub fn project(obj: Vec4, modelview: &Mat44, projection: &Mat44, viewport: Vec4) -> Vec3 {
    let clip = (projection * modelview) * obj;
    let ndc = clip / clip.w;

    Vec3 {
        x: viewport.x + viewport.z * (ndc.x + 1.0) / 2.0,
        y: viewport.y + viewport.w * (ndc.y + 1.0) / 2.0,
        z: (ndc.z + 1.0) / 2.0,
    }
}

/// Inverse of [`project`]. The result is homogeneous with `w == 1`, or NaN
/// when `projection * modelview` is singular.
pub fn unproject(win: Vec3, modelview: &Mat44, projection: &Mat44, viewport: Vec4) -> Vec4 {
    let inv = (projection * modelview).inverse();
    let ndc = Vec4 {
        x: 2.0 * (win.x - viewport.x) / viewport.z - 1.0,
        y: 2.0 * (win.y - viewport.y) / viewport.w - 1.0,
        z: 2.0 * win.z - 1.0,
        w: 1.0,
    };

    let obj = inv * ndc;
    obj / obj.w
}
