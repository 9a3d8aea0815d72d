//! Native GeoTIFF reading and writing on top of the `tiff` crate.
//!
//! Only the first image of a file is read. Chunky (interleaved) samples are
//! split into one band per sample. Georeferencing tags are carried through
//! untouched so that a band written back lands on the same grid.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Seek, Write};
use std::path::Path;

use ndarray::Array2;
use num_traits::{Bounded, NumCast, ToPrimitive};
use tiff::decoder::{Decoder, DecodingResult, Limits};
use tiff::encoder::colortype::{
    ColorType, Gray16, Gray32, Gray32Float, Gray64, Gray64Float, Gray8, GrayI16, GrayI32,
    GrayI64, GrayI8,
};
use tiff::encoder::{TiffEncoder, TiffValue};
use tiff::tags::Tag;
use tracing::{debug, info};

use super::{GeoTags, Raster, RasterMetadata, SampleType};
use crate::band::Band;
use crate::consts::MAX_DECODE_BYTES;
use crate::error::{BandviewError, RasterError, Result};

const TAG_MODEL_PIXEL_SCALE: u16 = 33550;
const TAG_MODEL_TIEPOINT: u16 = 33922;
const TAG_MODEL_TRANSFORMATION: u16 = 34264;
const TAG_GEO_KEY_DIRECTORY: u16 = 34735;
const TAG_GEO_DOUBLE_PARAMS: u16 = 34736;
const TAG_GEO_ASCII_PARAMS: u16 = 34737;
const TAG_GDAL_NODATA: u16 = 42113;

const PLANAR_SEPARATE: u16 = 2;

/// Read a GeoTIFF file into a [`Raster`], one band per sample.
pub fn read_geotiff(path: &Path) -> Result<Raster> {
    read_geotiff_with_limit(path, MAX_DECODE_BYTES)
}

/// Like [`read_geotiff`], refusing images whose decoded pixels exceed
/// `max_decode_bytes`.
pub fn read_geotiff_with_limit(path: &Path, max_decode_bytes: usize) -> Result<Raster> {
    let load_failure = |source: RasterError| BandviewError::LoadFailure {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(|e| load_failure(e.into()))?;
    let (metadata, bands) = decode(BufReader::new(file), max_decode_bytes).map_err(load_failure)?;

    info!(
        path = %path.display(),
        width = metadata.width,
        height = metadata.height,
        bands = metadata.band_count,
        sample_type = %metadata.sample_type,
        "Raster loaded"
    );

    Ok(Raster {
        path: path.to_path_buf(),
        metadata,
        bands,
    })
}

/// Write a single band as a GeoTIFF using the sample type and tags in `metadata`.
///
/// Integer sample types are rounded and clamped to their range; non-finite
/// values become 0.
pub fn write_geotiff(path: &Path, band: &Band, metadata: &RasterMetadata) -> Result<()> {
    let save_failure = |source: RasterError| BandviewError::SaveFailure {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(|e| save_failure(e.into()))?;
    let mut writer = BufWriter::new(file);
    encode(&mut writer, band, metadata).map_err(save_failure)?;
    writer.flush().map_err(|e| save_failure(e.into()))?;

    info!(
        path = %path.display(),
        sample_type = %metadata.sample_type,
        "Raster saved"
    );
    Ok(())
}

fn decode<R: Read + Seek>(
    reader: R,
    max_decode_bytes: usize,
) -> std::result::Result<(RasterMetadata, Vec<Band>), RasterError> {
    let mut limits = Limits::default();
    limits.decoding_buffer_size = max_decode_bytes;
    limits.intermediate_buffer_size = max_decode_bytes;
    let mut decoder = Decoder::new(reader)?.with_limits(limits);
    let (width, height) = decoder.dimensions()?;
    let (w, h) = (width as usize, height as usize);

    let samples = decoder
        .find_tag(Tag::SamplesPerPixel)?
        .map(|v| v.into_u16())
        .transpose()?
        .unwrap_or(1) as usize;
    if samples == 0 {
        return Err(RasterError::Unsupported("zero samples per pixel".into()));
    }

    let planar = decoder
        .find_tag(Tag::PlanarConfiguration)?
        .map(|v| v.into_u16())
        .transpose()?
        .unwrap_or(1);
    if planar == PLANAR_SEPARATE && samples > 1 {
        return Err(RasterError::Unsupported(
            "planar (band-sequential) multi-sample layout".into(),
        ));
    }

    let geo = read_geo_tags(&mut decoder);
    let nodata = decoder
        .get_tag_ascii_string(Tag::Unknown(TAG_GDAL_NODATA))
        .ok()
        .map(|s| s.trim_end_matches('\0').trim().to_string());

    let (sample_type, values) = widen(decoder.read_image()?)?;
    if values.len() != w * h * samples {
        return Err(RasterError::Unsupported(format!(
            "expected {} samples for {}x{}x{}, decoded {}",
            w * h * samples,
            w,
            h,
            samples,
            values.len()
        )));
    }

    let bands = split_samples(&values, h, w, samples);
    debug!(samples, ?sample_type, georeferenced = geo.is_georeferenced(), "TIFF decoded");

    let metadata = RasterMetadata {
        width: w,
        height: h,
        band_count: samples,
        sample_type,
        geo,
        nodata,
    };
    Ok((metadata, bands))
}

fn read_geo_tags<R: Read + Seek>(decoder: &mut Decoder<R>) -> GeoTags {
    GeoTags {
        pixel_scale: decoder
            .get_tag_f64_vec(Tag::Unknown(TAG_MODEL_PIXEL_SCALE))
            .ok(),
        tiepoint: decoder.get_tag_f64_vec(Tag::Unknown(TAG_MODEL_TIEPOINT)).ok(),
        transformation: decoder
            .get_tag_f64_vec(Tag::Unknown(TAG_MODEL_TRANSFORMATION))
            .ok(),
        geo_keys: decoder
            .get_tag_u16_vec(Tag::Unknown(TAG_GEO_KEY_DIRECTORY))
            .ok(),
        geo_doubles: decoder
            .get_tag_f64_vec(Tag::Unknown(TAG_GEO_DOUBLE_PARAMS))
            .ok(),
        geo_ascii: decoder
            .get_tag_ascii_string(Tag::Unknown(TAG_GEO_ASCII_PARAMS))
            .ok()
            .map(|s| s.trim_end_matches('\0').to_string()),
    }
}

fn widen(result: DecodingResult) -> std::result::Result<(SampleType, Vec<f32>), RasterError> {
    fn to_f32<T: ToPrimitive>(buf: &[T]) -> Vec<f32> {
        buf.iter().map(|v| v.to_f32().unwrap_or(f32::NAN)).collect()
    }

    let widened = match result {
        DecodingResult::U8(buf) => (SampleType::U8, to_f32(&buf)),
        DecodingResult::U16(buf) => (SampleType::U16, to_f32(&buf)),
        DecodingResult::U32(buf) => (SampleType::U32, to_f32(&buf)),
        DecodingResult::U64(buf) => (SampleType::U64, to_f32(&buf)),
        DecodingResult::I8(buf) => (SampleType::I8, to_f32(&buf)),
        DecodingResult::I16(buf) => (SampleType::I16, to_f32(&buf)),
        DecodingResult::I32(buf) => (SampleType::I32, to_f32(&buf)),
        DecodingResult::I64(buf) => (SampleType::I64, to_f32(&buf)),
        DecodingResult::F32(buf) => (SampleType::F32, buf),
        DecodingResult::F64(buf) => (SampleType::F64, to_f32(&buf)),
        #[allow(unreachable_patterns)]
        _ => return Err(RasterError::Unsupported("sample format".into())),
    };
    Ok(widened)
}

/// De-interleave `[b0, b1, .., bN, b0, b1, ..]` into N row-major bands.
fn split_samples(values: &[f32], h: usize, w: usize, samples: usize) -> Vec<Band> {
    (0..samples)
        .map(|k| {
            let data = Array2::from_shape_fn((h, w), |(row, col)| {
                values[(row * w + col) * samples + k]
            });
            Band::new(data)
        })
        .collect()
}

fn encode<W: Write + Seek>(
    writer: W,
    band: &Band,
    metadata: &RasterMetadata,
) -> std::result::Result<(), RasterError> {
    let mut encoder = TiffEncoder::new(writer)?;
    let (w, h) = (band.width() as u32, band.height() as u32);
    let tags = ExtraTags {
        geo: &metadata.geo,
        nodata: metadata.nodata.as_deref(),
    };

    match metadata.sample_type {
        SampleType::U8 => write_image::<_, Gray8>(&mut encoder, w, h, &tags, &integers::<u8>(band)),
        SampleType::U16 => write_image::<_, Gray16>(&mut encoder, w, h, &tags, &integers::<u16>(band)),
        SampleType::U32 => write_image::<_, Gray32>(&mut encoder, w, h, &tags, &integers::<u32>(band)),
        SampleType::U64 => write_image::<_, Gray64>(&mut encoder, w, h, &tags, &integers::<u64>(band)),
        SampleType::I8 => write_image::<_, GrayI8>(&mut encoder, w, h, &tags, &integers::<i8>(band)),
        SampleType::I16 => write_image::<_, GrayI16>(&mut encoder, w, h, &tags, &integers::<i16>(band)),
        SampleType::I32 => write_image::<_, GrayI32>(&mut encoder, w, h, &tags, &integers::<i32>(band)),
        SampleType::I64 => write_image::<_, GrayI64>(&mut encoder, w, h, &tags, &integers::<i64>(band)),
        SampleType::F32 => {
            let data: Vec<f32> = band.data.iter().copied().collect();
            write_image::<_, Gray32Float>(&mut encoder, w, h, &tags, &data)
        }
        SampleType::F64 => {
            let data: Vec<f64> = band.data.iter().map(|&v| v as f64).collect();
            write_image::<_, Gray64Float>(&mut encoder, w, h, &tags, &data)
        }
    }
}

struct ExtraTags<'a> {
    geo: &'a GeoTags,
    nodata: Option<&'a str>,
}

fn write_image<W, C>(
    encoder: &mut TiffEncoder<W>,
    width: u32,
    height: u32,
    tags: &ExtraTags<'_>,
    data: &[C::Inner],
) -> std::result::Result<(), RasterError>
where
    W: Write + Seek,
    C: ColorType,
    [C::Inner]: TiffValue,
{
    let mut image = encoder.new_image::<C>(width, height)?;
    let dir = image.encoder();

    let geo = tags.geo;
    if let Some(ref v) = geo.pixel_scale {
        dir.write_tag(Tag::Unknown(TAG_MODEL_PIXEL_SCALE), v.as_slice())?;
    }
    if let Some(ref v) = geo.tiepoint {
        dir.write_tag(Tag::Unknown(TAG_MODEL_TIEPOINT), v.as_slice())?;
    }
    if let Some(ref v) = geo.transformation {
        dir.write_tag(Tag::Unknown(TAG_MODEL_TRANSFORMATION), v.as_slice())?;
    }
    if let Some(ref v) = geo.geo_keys {
        dir.write_tag(Tag::Unknown(TAG_GEO_KEY_DIRECTORY), v.as_slice())?;
    }
    if let Some(ref v) = geo.geo_doubles {
        dir.write_tag(Tag::Unknown(TAG_GEO_DOUBLE_PARAMS), v.as_slice())?;
    }
    if let Some(ref v) = geo.geo_ascii {
        dir.write_tag(Tag::Unknown(TAG_GEO_ASCII_PARAMS), v.as_str())?;
    }
    if let Some(nodata) = tags.nodata {
        dir.write_tag(Tag::Unknown(TAG_GDAL_NODATA), nodata)?;
    }

    image.write_data(data)?;
    Ok(())
}

/// Round and clamp every sample into the integer type `T`.
fn integers<T>(band: &Band) -> Vec<T>
where
    T: NumCast + Bounded + Default + Copy,
{
    band.data
        .iter()
        .map(|&v| {
            if !v.is_finite() {
                return T::default();
            }
            let rounded = v.round() as f64;
            num_traits::cast::<f64, T>(rounded).unwrap_or_else(|| {
                if rounded < 0.0 {
                    T::min_value()
                } else {
                    T::max_value()
                }
            })
        })
        .collect()
}
