#![allow(dead_code)]

use ean128::Raster;

const WHITE: &str = "\x1B[38;2;255;255;255m█";
const BLACK: &str = "\x1B[38;2;0;0;0m█";
const PADDING: usize = 4;

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

pub fn display_raster(raster: &Raster) {
    let width = raster.width() as usize;
    let quiet_zone_v = str::repeat(WHITE, width + PADDING * 2);
    let quiet_zone_h = &quiet_zone_v[..PADDING * WHITE.len()];

    println!("{quiet_zone_v}\n{quiet_zone_v}");
    for _ in 0..raster.height() {
        print!("{quiet_zone_h}");
        for &on in raster.row() { print!("{}", if on { BLACK } else { WHITE }); }
        println!("{quiet_zone_h}");
    }
    println!("{quiet_zone_v}\n{quiet_zone_v}\x1B[0m");
}

pub fn display_bitmap(width: usize, bitmap: &[u8]) {
    let quiet_zone_v = str::repeat(WHITE, width + PADDING * 2);
    let quiet_zone_h = &quiet_zone_v[..PADDING * WHITE.len()];

    println!("{quiet_zone_v}\n{quiet_zone_v}");
    for line in bitmap.chunks((width + 7) / 8) {
        print!("{quiet_zone_h}");
        for x in 0..width {
            let on = (line[x / 8] >> (7 - x % 8)) & 1 != 0;
            print!("{}", if on { BLACK } else { WHITE });
        }
        println!("{quiet_zone_h}");
    }
    println!("{quiet_zone_v}\n{quiet_zone_v}\x1B[0m");
}
