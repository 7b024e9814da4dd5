use std::f32::consts::PI;

/// Unit UV-sphere geometry. Normals equal positions.
#[derive(Clone, Debug, Default)]
pub struct SphereMesh {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

impl SphereMesh {
    /// Tessellate with `latitude_bands` rings from pole to pole and
    /// `longitude_bands` segments around. The seam column is duplicated so
    /// there are `(lat + 1) * (lon + 1)` vertices, which always fits a `u32`
    /// index.
    pub fn uv_sphere(latitude_bands: u16, longitude_bands: u16) -> Self {
        let lat_n = latitude_bands as usize;
        let lon_n = longitude_bands as usize;
        let vertex_count = (lat_n + 1) * (lon_n + 1);
        let mut positions = Vec::with_capacity(vertex_count);
        let mut normals = Vec::with_capacity(vertex_count);

        for lat in 0..=lat_n {
            let theta = lat as f32 * PI / lat_n.max(1) as f32;
            let (sin_theta, cos_theta) = theta.sin_cos();
            for lon in 0..=lon_n {
                let phi = lon as f32 * 2.0 * PI / lon_n.max(1) as f32;
                let (sin_phi, cos_phi) = phi.sin_cos();
                let p = [cos_phi * sin_theta, cos_theta, sin_phi * sin_theta];
                positions.push(p);
                normals.push(p);
            }
        }

        let row = lon_n + 1;
        let mut indices = Vec::with_capacity(lat_n * lon_n * 6);
        for lat in 0..lat_n {
            for lon in 0..lon_n {
                let first = lat * row + lon;
                let second = first + row;
                indices.extend(
                    [first, second, first + 1, second, second + 1, first + 1]
                        .map(|i| i as u32),
                );
            }
        }

        Self {
            positions,
            normals,
            indices,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Interleaved `[position, normal]` vertices for upload.
    pub fn interleaved(&self) -> Vec<[[f32; 3]; 2]> {
        self.positions
            .iter()
            .zip(&self.normals)
            .map(|(p, n)| [*p, *n])
            .collect()
    }
}
