use console::Style;

use bandview_core::band::BandStats;
use bandview_core::raster::Raster;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

/// Styled metadata block for one raster, with band statistics if given.
pub fn print_raster_summary(index: usize, raster: &Raster, stats: Option<&[BandStats]>) {
    let s = Styles::new();
    let meta = &raster.metadata;

    println!();
    println!(
        "  {} {}",
        s.title.apply_to(format!("File {}", index + 1)),
        s.path.apply_to(raster.path.display())
    );
    println!(
        "    {:<14}{}",
        s.label.apply_to("Dimensions"),
        s.value.apply_to(format!("{}x{}", meta.width, meta.height))
    );
    println!(
        "    {:<14}{}",
        s.label.apply_to("Bands"),
        s.value.apply_to(meta.band_count)
    );
    println!(
        "    {:<14}{}",
        s.label.apply_to("Sample type"),
        s.value.apply_to(meta.sample_type)
    );

    match (meta.geo.origin(), meta.geo.pixel_size()) {
        (Some((x, y)), Some((px, py))) => {
            println!(
                "    {:<14}{}",
                s.label.apply_to("Origin"),
                s.value.apply_to(format!("{x:.3}, {y:.3}"))
            );
            println!(
                "    {:<14}{}",
                s.label.apply_to("Pixel size"),
                s.value.apply_to(format!("{px} x {py}"))
            );
        }
        _ if meta.geo.is_georeferenced() => {
            println!(
                "    {:<14}{}",
                s.label.apply_to("Georeference"),
                s.value.apply_to("transformation matrix")
            );
        }
        _ => {
            println!(
                "    {:<14}{}",
                s.label.apply_to("Georeference"),
                s.disabled.apply_to("none")
            );
        }
    }

    if let Some(ref nodata) = meta.nodata {
        println!(
            "    {:<14}{}",
            s.label.apply_to("NoData"),
            s.value.apply_to(nodata)
        );
    }

    if let Some(stats) = stats {
        println!();
        println!("    {}", s.header.apply_to("Band statistics"));
        for (i, st) in stats.iter().enumerate() {
            println!(
                "    {:<14}{}",
                s.label.apply_to(format!("Band {}", i + 1)),
                s.value.apply_to(format!(
                    "mean {:.3}  min {}  max {}",
                    st.mean, st.min, st.max
                ))
            );
        }
    }
}
