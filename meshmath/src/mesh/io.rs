use super::*;
use bytemuck::{Pod, Zeroable};
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::Path;

// On-disk layout, all little-endian, no magic and no version:
//   u32 vertex_count
//   u32 triangle_count
//   vertex_count * (px, py, pz, nx, ny, nz) f32
//   triangle_count * (i0, i1, i2) u32
const HEADER_SIZE: u64 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Header {
    vertex_count: u32,
    triangle_count: u32,
}

impl Header {
    fn too_large(&self) -> MeshError {
        MeshError::TooLarge { vertex_count: self.vertex_count as u64, triangle_count: self.triangle_count as u64 }
    }

    fn vertex_bytes(&self) -> u64 {
        self.vertex_count as u64 * size_of::<Vertex>() as u64
    }

    fn index_bytes(&self) -> u64 {
        self.triangle_count as u64 * size_of::<[u32; 3]>() as u64
    }

    fn payload_bytes(&self) -> u64 {
        self.vertex_bytes() + self.index_bytes()
    }
}

/// Reads a mesh from `path`.
///
/// For regular files the length is compared with the size the header implies
/// before any buffer is allocated, so a corrupt header fails fast with
/// [`MeshError::Truncated`] instead of requesting gigabytes. Pipes and other
/// special files report no usable length and are read like [`read_mesh`].
/// Bytes after the index section are ignored.
pub fn load_mesh<P: AsRef<Path>>(path: P) -> Result<MeshData, MeshError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let metadata = file.metadata()?;
    let available = metadata.is_file().then(|| metadata.len().saturating_sub(HEADER_SIZE));
    let mut reader = BufReader::new(file);

    let header = read_header(&mut reader)?;
    let mesh = read_payload(&mut reader, header, available)?;

    if let Some(trailing) = available.map(|a| a - header.payload_bytes()).filter(|&t| t > 0) {
        log::debug!("{}: ignoring {} trailing bytes", path.display(), trailing);
    }
    log::debug!(
        "Loaded {}: {} vertices, {} triangles, layout {:?}",
        path.display(),
        mesh.vertex_count(),
        mesh.triangle_count(),
        mesh.layout()
    );
    Ok(mesh)
}

/// Reads a mesh from an arbitrary stream, consuming exactly the bytes the
/// header declares.
///
/// The stream length is unknown here, so the declared buffers are allocated
/// up front. Prefer [`load_mesh`] for untrusted files.
pub fn read_mesh<R: Read>(mut reader: R) -> Result<MeshData, MeshError> {
    let header = read_header(&mut reader)?;
    read_payload(&mut reader, header, None)
}

/// Writes `mesh` in the binary layout [`read_mesh`] expects.
pub fn write_mesh<W: Write>(mesh: &MeshData, mut writer: W) -> Result<(), MeshError> {
    let too_large =
        || MeshError::TooLarge { vertex_count: mesh.vertex_count() as u64, triangle_count: mesh.triangle_count() as u64 };
    let vertex_count = u32::try_from(mesh.vertex_count()).map_err(|_| too_large())?;
    let triangle_count = u32::try_from(mesh.triangle_count()).map_err(|_| too_large())?;

    writer.write_all(&vertex_count.to_le_bytes())?;
    writer.write_all(&triangle_count.to_le_bytes())?;
    write_section(&mut writer, mesh.vertices())?;
    write_section(&mut writer, mesh.triangle_indices())?;
    writer.flush()?;
    Ok(())
}

pub fn save_mesh<P: AsRef<Path>>(mesh: &MeshData, path: P) -> Result<(), MeshError> {
    let path = path.as_ref();
    let writer = BufWriter::new(File::create(path)?);
    write_mesh(mesh, writer)?;
    log::debug!("Saved {}: {} vertices, {} triangles", path.display(), mesh.vertex_count(), mesh.triangle_count());
    Ok(())
}

fn read_header<R: Read>(reader: &mut R) -> Result<Header, MeshError> {
    let vertex_count = read_u32(reader, "vertex count")?;
    let triangle_count = read_u32(reader, "triangle count")?;
    Ok(Header { vertex_count, triangle_count })
}

fn read_u32<R: Read>(reader: &mut R, section: &'static str) -> Result<u32, MeshError> {
    let mut bytes = [0u8; 4];
    reader.read_exact(&mut bytes).map_err(|e| truncated_or_io(e, section, 4))?;
    Ok(u32::from_le_bytes(bytes))
}

// `available` is the number of payload bytes known to follow the header.
fn read_payload<R: Read>(reader: &mut R, header: Header, available: Option<u64>) -> Result<MeshData, MeshError> {
    if let Some(available) = available {
        if available < header.vertex_bytes() {
            return Err(MeshError::Truncated { section: "vertex data", expected: header.vertex_bytes() });
        }
        if available < header.payload_bytes() {
            return Err(MeshError::Truncated { section: "triangle data", expected: header.index_bytes() });
        }
    }

    let vertex_count = usize::try_from(header.vertex_count).map_err(|_| header.too_large())?;
    let triangle_count = usize::try_from(header.triangle_count).map_err(|_| header.too_large())?;
    // both fit in usize, so the byte sizes can only overflow on 32-bit targets
    if usize::try_from(header.payload_bytes()).is_err() {
        return Err(header.too_large());
    }

    let vertices: Vec<Vertex> = read_section(reader, vertex_count, "vertex data")?;
    let triangles: Vec<[u32; 3]> = read_section(reader, triangle_count, "triangle data")?;
    Ok(MeshData::new(vertices, triangles))
}

// Reads `count` elements of a POD type built from 4-byte little-endian words.
fn read_section<T: Pod, R: Read>(reader: &mut R, count: usize, section: &'static str) -> Result<Vec<T>, MeshError> {
    let mut buffer = vec![T::zeroed(); count];
    let bytes: &mut [u8] = bytemuck::cast_slice_mut(&mut buffer);
    let expected = bytes.len() as u64;
    reader.read_exact(bytes).map_err(|e| truncated_or_io(e, section, expected))?;
    #[cfg(target_endian = "big")]
    swap_words(bytes);
    Ok(buffer)
}

fn write_section<T: Pod, W: Write>(writer: &mut W, data: &[T]) -> Result<(), MeshError> {
    #[cfg(target_endian = "little")]
    writer.write_all(bytemuck::cast_slice(data))?;
    #[cfg(target_endian = "big")]
    {
        let mut bytes = bytemuck::cast_slice::<T, u8>(data).to_vec();
        swap_words(&mut bytes);
        writer.write_all(&bytes)?;
    }
    Ok(())
}

#[cfg(target_endian = "big")]
fn swap_words(bytes: &mut [u8]) {
    for word in bytes.chunks_exact_mut(4) {
        word.reverse();
    }
}

fn truncated_or_io(e: std::io::Error, section: &'static str, expected: u64) -> MeshError {
    match e.kind() {
        ErrorKind::UnexpectedEof => MeshError::Truncated { section, expected },
        _ => MeshError::Io(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::*;
    use rstest::rstest;
    use std::io::Cursor;

    fn triangle_file() -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&3u32.to_le_bytes());
        bytes.extend_from_slice(&1u32.to_le_bytes());
        for p in [[0.0f32, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]] {
            for f in p.iter().chain([0.0f32, 0.0, 1.0].iter()) {
                bytes.extend_from_slice(&f.to_le_bytes());
            }
        }
        for i in [0u32, 1, 2] {
            bytes.extend_from_slice(&i.to_le_bytes());
        }
        bytes
    }

    #[test]
    fn test_read_triangle() {
        let mesh = read_mesh(Cursor::new(triangle_file())).unwrap();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(
            mesh.vertex_data(),
            &[0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]
        );
        assert_eq!(mesh.triangles(), &[0, 1, 2]);
        assert_eq!(mesh.vertex_data().len() * 4, 24 * 3);
        assert_eq!(mesh.triangles().len() * 4, 12);
    }

    #[test]
    fn test_read_consumes_only_declared_bytes() {
        let mut bytes = triangle_file();
        bytes.extend_from_slice(b"tail");
        let mut cursor = Cursor::new(bytes);
        read_mesh(&mut cursor).unwrap();
        assert_eq!(cursor.position(), 8 + 72 + 12);
    }

    #[test]
    fn test_read_empty_mesh() {
        let mesh = read_mesh(Cursor::new([0u8; 8])).unwrap();
        assert_eq!(mesh, MeshData::default());
    }

    #[rstest]
    #[case(0, "vertex count")]
    #[case(3, "vertex count")]
    #[case(4, "triangle count")]
    #[case(7, "triangle count")]
    #[case(8, "vertex data")]
    #[case(79, "vertex data")]
    #[case(80, "triangle data")]
    #[case(91, "triangle data")]
    fn test_read_truncated(#[case] len: usize, #[case] expected_section: &str) {
        let bytes = triangle_file();
        match read_mesh(Cursor::new(&bytes[..len])) {
            Err(MeshError::Truncated { section, .. }) => assert_eq!(section, expected_section),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_truncated_reports_section_size() {
        let bytes = triangle_file();
        match read_mesh(Cursor::new(&bytes[..50])) {
            Err(MeshError::Truncated { expected, .. }) => assert_eq!(expected, 72),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_write_read_round_trip() {
        let mut mesh = MeshData::cube(1.5);
        mesh.vertices_mut()[0].normal = Vec3::new(-0.0, f32::MIN_POSITIVE, 1e-30);

        let mut bytes = Vec::new();
        write_mesh(&mesh, &mut bytes).unwrap();
        assert_eq!(bytes.len(), 8 + 36 * 24 + 12 * 12);

        let back = read_mesh(Cursor::new(&bytes)).unwrap();
        let bits = |m: &MeshData| m.vertex_data().iter().map(|f| f.to_bits()).collect::<Vec<_>>();
        assert_eq!(bits(&back), bits(&mesh));
        assert_eq!(back.triangles(), mesh.triangles());
    }

    #[test]
    fn test_write_matches_file_layout() {
        let mut bytes = Vec::new();
        let mesh = read_mesh(Cursor::new(triangle_file())).unwrap();
        write_mesh(&mesh, &mut bytes).unwrap();
        assert_eq!(bytes, triangle_file());
    }

    #[test]
    fn test_io_error_is_not_truncation() {
        struct Broken;
        impl Read for Broken {
            fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(ErrorKind::PermissionDenied, "nope"))
            }
        }
        assert!(matches!(read_mesh(Broken), Err(MeshError::Io(_))));
    }
}
