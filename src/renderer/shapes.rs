//! Shape generation for 2D primitives
//!
//! Turns recorded draw calls into triangle lists in canvas units.

use super::surface::{Color, DrawCommand, DrawList};
use super::vertex::Vertex;
use crate::sim::Rect;

/// Two triangles covering `rect`, top edge in `top`, bottom edge in `bottom`
pub fn quad(rect: Rect, top: Color, bottom: Color) -> [Vertex; 6] {
    let (x0, y0) = (rect.x, rect.y);
    let (x1, y1) = (rect.right(), rect.bottom());
    [
        Vertex::new(x0, y0, top),
        Vertex::new(x0, y1, bottom),
        Vertex::new(x1, y0, top),
        Vertex::new(x1, y0, top),
        Vertex::new(x0, y1, bottom),
        Vertex::new(x1, y1, bottom),
    ]
}

/// Generate the triangle list for a whole frame, in paint order
pub fn tessellate(list: &DrawList, out: &mut Vec<Vertex>) {
    out.clear();
    out.reserve(list.len() * 6);
    for command in list.commands() {
        let vertices = match *command {
            DrawCommand::Rect { rect, color } => quad(rect, color, color),
            DrawCommand::Gradient { rect, top, bottom } => quad(rect, top, bottom),
        };
        out.extend_from_slice(&vertices);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::surface::Surface;

    const RED: Color = [1.0, 0.0, 0.0, 1.0];
    const BLUE: Color = [0.0, 0.0, 1.0, 1.0];

    #[test]
    fn test_quad_corners() {
        let vertices = quad(Rect::new(10.0, 20.0, 30.0, 40.0), RED, BLUE);
        let xs: Vec<f32> = vertices.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = vertices.iter().map(|v| v.position[1]).collect();
        assert!(xs.iter().all(|&x| x == 10.0 || x == 40.0));
        assert!(ys.iter().all(|&y| y == 20.0 || y == 60.0));
        // Top vertices carry the top color
        for v in &vertices {
            if v.position[1] == 20.0 {
                assert_eq!(v.color, RED);
            } else {
                assert_eq!(v.color, BLUE);
            }
        }
    }

    #[test]
    fn test_tessellate_keeps_order() {
        let mut list = DrawList::new();
        list.fill_vertical_gradient(Rect::new(0.0, 0.0, 800.0, 400.0), RED, BLUE);
        list.fill_rect(Rect::new(1.0, 1.0, 2.0, 2.0), BLUE);

        let mut out = vec![Vertex::new(9.0, 9.0, RED)];
        tessellate(&list, &mut out);
        assert_eq!(out.len(), 12);
        assert_eq!(out[0].position, [0.0, 0.0]);
        assert_eq!(out[6].position, [1.0, 1.0]);
        assert_eq!(out[11].color, BLUE);
    }
}
