use std::fs::File;

/**
 * File: /src/config.rs
 * Created Date: Friday, January 26th 2024
 * Author: Zihan
 * -----
 * Last Modified: Monday, 6th July 2026 11:27:46 am
 * Modified By: the developer formerly known as Zihan at <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-07-06		Zihan	LAS runner arguments
 */
use ndarray::Array2;
use ndarray_npy::ReadNpyExt;

pub struct Config {
    // 字段定义
    matrix: Array2<f64>,
    num_biclusters: usize,
    score_threshold: f64,
    randomized_searches: usize,
    transform: bool,
}

impl Config {
    /// constructor
    ///
    /// # Examples
    /// ```bash
    /// $ cargo run -- "data/matrix.npy" 10 1.0 1000
    /// ```
    pub fn new(
        mut args: impl Iterator<Item = String>,
    ) -> Result<Config, Box<dyn std::error::Error>> {
        // args:
        // 0: program name
        // 1: matrix path (.npy)
        // 2: num_biclusters
        // 3: score_threshold
        // 4: randomized_searches
        // 5: transform (optional, default false)
        args.next();
        let path = args.next().ok_or("missing matrix path")?;
        let reader = File::open(path)?;
        let matrix = Array2::<f64>::read_npy(reader)?;
        let num_biclusters = args.next().ok_or("missing num_biclusters")?.parse::<usize>()?;
        let score_threshold = args.next().ok_or("missing score_threshold")?.parse::<f64>()?;
        let randomized_searches = args
            .next()
            .ok_or("missing randomized_searches")?
            .parse::<usize>()?;
        let transform = match args.next() {
            Some(flag) => flag.parse::<bool>()?,
            None => false,
        };

        Ok(Config {
            matrix,
            num_biclusters,
            score_threshold,
            randomized_searches,
            transform,
        })
    }

    pub fn get_matrix(&self) -> &Array2<f64> {
        &self.matrix
    }

    pub fn get_num_biclusters(&self) -> usize {
        self.num_biclusters
    }

    pub fn get_score_threshold(&self) -> f64 {
        self.score_threshold
    }

    pub fn get_randomized_searches(&self) -> usize {
        self.randomized_searches
    }

    pub fn get_transform(&self) -> bool {
        self.transform
    }

    pub fn get_row(&self) -> usize {
        self.matrix.shape()[0]
    }

    pub fn get_col(&self) -> usize {
        self.matrix.shape()[1]
    }
}
