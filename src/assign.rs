use std::collections::HashMap;

use log::debug;

use crate::{solve_network_flow, Edge, NetworkError};

/// An instructor with a teaching-load cap and a course preference list.
#[derive(Clone, Debug)]
pub struct Instructor {
    pub last_name: String,
    pub max_courses: u32,
    pub preferences: Vec<String>,
}

/// The courses handed to one instructor by [`assign_courses`]. Instructors
/// appear in input order; an instructor left without courses gets an empty
/// list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignment {
    pub instructor: String,
    pub courses: Vec<String>,
}

/// Bidirectional mapping between instructor/course names and flow-network
/// vertices. Vertex 0 is reserved for the super-source, so names start at 1.
struct NameIndex {
    names: Vec<String>,
    vertices: HashMap<String, usize>,
}

impl NameIndex {
    fn new() -> Self {
        NameIndex {
            names: Vec::new(),
            vertices: HashMap::new(),
        }
    }

    fn insert(&mut self, name: &str) -> usize {
        let vertex = self.names.len() + 1;
        self.names.push(name.to_string());
        self.vertices.insert(name.to_string(), vertex);
        vertex
    }

    fn vertex(&self, name: &str) -> Option<usize> {
        self.vertices.get(name).copied()
    }

    fn name(&self, vertex: usize) -> &str {
        &self.names[vertex - 1]
    }
}

/// Assigns courses to instructors by reduction to maximum flow.
///
/// The network has one vertex per instructor and per course between a
/// super-source and a super-sink: source->instructor arcs carry the
/// instructor's course cap, instructor->course arcs (capacity 1) exist for
/// each preference, and course->sink arcs (capacity 1) keep every course
/// single-taught. The nonzero instructor->course flow is the assignment.
pub fn assign_courses(
    instructors: &[Instructor],
    courses: &[String],
) -> Result<Vec<Assignment>, NetworkError> {
    let source = 0;
    let sink = instructors.len() + courses.len() + 1;

    let mut index = NameIndex::new();
    let mut network = Vec::new();
    for instructor in instructors {
        let vertex = index.insert(&instructor.last_name);
        network.push(Edge::new(source, vertex, instructor.max_courses));
    }
    for course in courses {
        let vertex = index.insert(course);
        network.push(Edge::new(vertex, sink, 1));
    }
    for (i, instructor) in instructors.iter().enumerate() {
        let vertex = i + 1;
        for preference in &instructor.preferences {
            let course_vertex = index
                .vertex(preference)
                .filter(|&v| v > instructors.len())
                .ok_or_else(|| NetworkError::UnknownCourse {
                    instructor: instructor.last_name.clone(),
                    course: preference.clone(),
                })?;
            network.push(Edge::new(vertex, course_vertex, 1));
        }
    }

    let flow = solve_network_flow(&network, sink + 1)?;
    debug!("assignment flow solved, {} arcs carry flow", flow.len());

    let mut assignments: Vec<Assignment> = instructors
        .iter()
        .map(|instructor| Assignment {
            instructor: instructor.last_name.clone(),
            courses: Vec::new(),
        })
        .collect();
    for edge in flow {
        if edge.from != source && edge.to != sink {
            assignments[edge.from - 1]
                .courses
                .push(index.name(edge.to).to_string());
        }
    }
    Ok(assignments)
}
