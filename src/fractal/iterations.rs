use num_complex::Complex64;

use crate::fractal::PlanePoint;

/// Valeur d'un pixel resté borné (dans l'ensemble).
pub const BOUNDED: u8 = 0;
/// Valeur d'un pixel échappé.
pub const ESCAPED: u8 = 255;

/// Nombre de pixels traités ensemble par [`iterate_group`].
pub const GROUP_SIZE: usize = 8;

/// Itère `z_{n+1} = z_n^2 + c` à partir de `start`.
///
/// Retourne le nombre de pas effectués avant que `|z|^2` n'atteigne
/// `escape_radius^2`, plafonné à `iteration_max`. Une graine déjà hors du
/// rayon donne 0 ; un point qui s'échappe au pas k donne k - 1. Le résultat
/// vaut donc `iteration_max` si et seulement si le point est resté borné.
pub fn iterate_point(start: Complex64, c: PlanePoint, escape_radius: f64, iteration_max: u32) -> u32 {
    let radius_sqr = escape_radius * escape_radius;
    let mut zx = start.re;
    let mut zy = start.im;
    let mut zx2 = zx * zx;
    let mut zy2 = zy * zy;

    if zx2 + zy2 >= radius_sqr {
        return 0;
    }

    for i in 0..iteration_max {
        // (zx + i*zy)^2 + c : réel zx^2 - zy^2 + cx, imaginaire 2*zx*zy + cy
        zy = 2.0 * zx * zy + c.im;
        zx = zx2 - zy2 + c.re;
        zx2 = zx * zx;
        zy2 = zy * zy;
        if zx2 + zy2 >= radius_sqr {
            return i;
        }
    }
    iteration_max
}

/// Même récurrence que [`iterate_point`], sur 8 points à la fois.
///
/// Les huit voies avancent au même rythme, sans dépendance entre elles ;
/// une voie échappée est simplement gelée. Chaque voie effectue exactement
/// les mêmes opérations flottantes que la version scalaire, le résultat est
/// donc identique au bit près.
pub fn iterate_group(
    start: Complex64,
    cx: &[f64; GROUP_SIZE],
    cy: &[f64; GROUP_SIZE],
    escape_radius: f64,
    iteration_max: u32,
) -> [u32; GROUP_SIZE] {
    let radius_sqr = escape_radius * escape_radius;
    let mut zx = [start.re; GROUP_SIZE];
    let mut zy = [start.im; GROUP_SIZE];
    let mut zx2 = [start.re * start.re; GROUP_SIZE];
    let mut zy2 = [start.im * start.im; GROUP_SIZE];

    // La graine est commune aux huit voies.
    if zx2[0] + zy2[0] >= radius_sqr {
        return [0; GROUP_SIZE];
    }

    let mut counts = [iteration_max; GROUP_SIZE];
    let mut active = [true; GROUP_SIZE];

    for i in 0..iteration_max {
        for lane in 0..GROUP_SIZE {
            let next_y = 2.0 * zx[lane] * zy[lane] + cy[lane];
            let next_x = zx2[lane] - zy2[lane] + cx[lane];
            if active[lane] {
                zy[lane] = next_y;
                zx[lane] = next_x;
                zx2[lane] = next_x * next_x;
                zy2[lane] = next_y * next_y;
                if zx2[lane] + zy2[lane] >= radius_sqr {
                    counts[lane] = i;
                    active[lane] = false;
                }
            }
        }
        if !active.iter().any(|&a| a) {
            break;
        }
    }
    counts
}

/// Octet du pixel selon le résultat du noyau.
#[inline]
pub fn classify(iteration: u32, iteration_max: u32) -> u8 {
    if iteration == iteration_max {
        BOUNDED
    } else {
        ESCAPED
    }
}
