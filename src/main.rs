/*
 * File: /main.rs
 * Created Date: Tuesday November 21st 2023
 * Author: Zihan
 * -----
 * Last Modified: Monday, 6th July 2026 2:43:09 pm
 * Modified By: the developer formerly known as Zihan at <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-07-06		Zihan	LAS command line runner
 */

use std::env;
use std::process;
use std::time::Instant;

use chrono::Local;
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;

use las_bicluster::config::Config;
use las_bicluster::las::Las;
use las_bicluster::matrix::Matrix;

fn timestamp() -> String {
    Local::now().format("%H:%M:%S").to_string()
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    SimpleLogger::new().with_level(LevelFilter::Info).init()?;

    let config = Config::new(env::args())?;
    info!(
        "[method: las] [{}] loaded {}x{} matrix",
        timestamp(),
        config.get_row(),
        config.get_col()
    );

    let las = Las::new()
        .num_biclusters(config.get_num_biclusters())
        .score_threshold(config.get_score_threshold())
        .randomized_searches(config.get_randomized_searches())
        .transform(config.get_transform());

    let matrix = Matrix::new(config.get_matrix().clone());

    let start_time = Instant::now();
    let result = las.run(&matrix)?;
    info!(
        "[method: las] [{}] extraction done in {:.1}s, {} biclusters",
        timestamp(),
        start_time.elapsed().as_secs_f32(),
        result.len()
    );

    println!("{}", result.summary());
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}
