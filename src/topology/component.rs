//! Flow components as handed over by a flow decomposition.

use crate::topology::connection::SaddleConnection;
use crate::topology::vector::Scalar;

/// One saddle connection on the perimeter of a flow component.
#[derive(Clone, Debug, PartialEq)]
pub struct PerimeterCurve<T> {
    connection: SaddleConnection<T>,
    vertical: bool,
    boundary: bool,
}

impl<T: Scalar> PerimeterCurve<T> {
    /// `vertical`: the connection is parallel to the flow.
    /// `boundary`: the component lies on one side of the connection only.
    pub fn new(connection: SaddleConnection<T>, vertical: bool, boundary: bool) -> Self {
        Self {
            connection,
            vertical,
            boundary,
        }
    }

    pub fn saddle_connection(&self) -> &SaddleConnection<T> {
        &self.connection
    }

    pub fn vertical(&self) -> bool {
        self.vertical
    }

    pub fn boundary(&self) -> bool {
        self.boundary
    }
}

/// A component of a flow decomposition, described by its perimeter.
#[derive(Clone, Debug, PartialEq)]
pub struct FlowComponent<T> {
    perimeter: Vec<PerimeterCurve<T>>,
    cylinder: bool,
}

impl<T: Scalar> FlowComponent<T> {
    pub fn new(perimeter: Vec<PerimeterCurve<T>>, cylinder: bool) -> Self {
        Self {
            perimeter,
            cylinder,
        }
    }

    pub fn perimeter(&self) -> &[PerimeterCurve<T>] {
        &self.perimeter
    }

    pub fn is_cylinder(&self) -> bool {
        self.cylinder
    }

    /// The perimeter curves worth drawing.
    ///
    /// Non-cylinders often carry many connections that the decomposition
    /// created inside the component, with the component on both sides. Only
    /// connections flagged as `boundary` are kept for them.
    ///
    /// Known limitation: a surface made of a single minimal or undetermined
    /// component has no boundary connection at all, so its perimeter comes
    /// out empty.
    pub fn relevant_perimeter(&self) -> Vec<&PerimeterCurve<T>> {
        self.perimeter
            .iter()
            .filter(|curve| self.cylinder || curve.boundary())
            .collect()
    }
}

/// All components of a decomposition of one surface, in decomposition order.
#[derive(Clone, Debug, PartialEq)]
pub struct FlowDecomposition<T> {
    components: Vec<FlowComponent<T>>,
}

impl<T: Scalar> FlowDecomposition<T> {
    pub fn new(components: Vec<FlowComponent<T>>) -> Self {
        Self { components }
    }

    pub fn components(&self) -> &[FlowComponent<T>] {
        &self.components
    }
}
