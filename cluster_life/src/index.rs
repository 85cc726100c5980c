// index.rs - Lookup of the cluster owning a world coordinate

use crate::cluster::Cluster;

/// Storage and point lookup for the clusters of a world.
///
/// Clusters never overlap, so at most one cluster answers `locate`.
pub trait ClusterIndex: Default {
    fn locate(&self, x: i64, y: i64) -> Option<&Cluster>;
    fn locate_mut(&mut self, x: i64, y: i64) -> Option<&mut Cluster>;
    fn insert(&mut self, cluster: Cluster);
    fn iter(&self) -> impl Iterator<Item = &Cluster>;
    fn iter_mut(&mut self) -> impl Iterator<Item = &mut Cluster>;
    fn retain<F: FnMut(&Cluster) -> bool>(&mut self, keep: F);
    fn len(&self) -> usize;
    fn clear(&mut self);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Insertion-ordered list searched front to back.
#[derive(Debug, Clone, Default)]
pub struct LinearIndex {
    clusters: Vec<Cluster>,
}

impl ClusterIndex for LinearIndex {
    fn locate(&self, x: i64, y: i64) -> Option<&Cluster> {
        self.clusters.iter().find(|cluster| cluster.contains(x, y))
    }

    fn locate_mut(&mut self, x: i64, y: i64) -> Option<&mut Cluster> {
        self.clusters.iter_mut().find(|cluster| cluster.contains(x, y))
    }

    fn insert(&mut self, cluster: Cluster) {
        self.clusters.push(cluster);
    }

    fn iter(&self) -> impl Iterator<Item = &Cluster> {
        self.clusters.iter()
    }

    fn iter_mut(&mut self) -> impl Iterator<Item = &mut Cluster> {
        self.clusters.iter_mut()
    }

    fn retain<F: FnMut(&Cluster) -> bool>(&mut self, keep: F) {
        self.clusters.retain(keep);
    }

    fn len(&self) -> usize {
        self.clusters.len()
    }

    fn clear(&mut self) {
        self.clusters.clear();
    }
}
