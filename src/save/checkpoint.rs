use crate::mccfr::info::Info;
use crate::mccfr::memory::Memory;
use crate::mccfr::path::Path;
use crate::mccfr::profile::Profile;
use crate::N_ACTIONS;
use anyhow::Context;
use byteorder::ReadBytesExt;
use byteorder::WriteBytesExt;
use byteorder::BE;
use std::io::Read;
use std::io::Write;

const MAGIC: u32 = 0x53_53_43_4B; // "SSCK"
const VERSION: u16 = 1;

/// checkpoint persistence. a fixed big-endian record format:
/// header (magic, version, iteration, info count) followed by
/// one record per info set holding the key, the recorded legal
/// set, and the ten regret and ten policy sums. records stream
/// out of the BTreeMap in key order, so saving the same profile
/// twice writes identical bytes.
impl Profile {
    pub fn save(&self, path: &std::path::Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create {}", parent.display()))?;
            }
        }
        let file = std::fs::File::create(path)
            .with_context(|| format!("create checkpoint {}", path.display()))?;
        let ref mut writer = std::io::BufWriter::new(file);
        writer.write_u32::<BE>(MAGIC)?;
        writer.write_u16::<BE>(VERSION)?;
        writer.write_u64::<BE>(self.iterations as u64)?;
        writer.write_u64::<BE>(self.encounters.len() as u64)?;
        for (info, memory) in self.encounters.iter() {
            writer.write_u8(info.present())?;
            writer.write_u16::<BE>(info.path().len() as u16)?;
            writer.write_all(info.path().bytes())?;
            writer.write_u8(memory.choices.len() as u8)?;
            writer.write_all(&memory.choices)?;
            for regret in memory.regret.iter() {
                writer.write_f32::<BE>(*regret)?;
            }
            for policy in memory.policy.iter() {
                writer.write_f32::<BE>(*policy)?;
            }
        }
        writer.flush()?;
        log::info!(
            "saved blueprint ({} infos, iter {}) to {}",
            self.encounters.len(),
            self.iterations,
            path.display()
        );
        Ok(())
    }

    pub fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        let file = std::fs::File::open(path)
            .with_context(|| format!("open checkpoint {}", path.display()))?;
        let ref mut reader = std::io::BufReader::new(file);
        anyhow::ensure!(
            reader.read_u32::<BE>()? == MAGIC,
            "{} is not a blueprint checkpoint",
            path.display()
        );
        anyhow::ensure!(
            reader.read_u16::<BE>()? == VERSION,
            "unsupported checkpoint version in {}",
            path.display()
        );
        let iterations = reader.read_u64::<BE>()? as usize;
        let count = reader.read_u64::<BE>()? as usize;
        let mut profile = Profile::default();
        profile.set_iterations(iterations);
        for _ in 0..count {
            let present = reader.read_u8()?;
            let plies = reader.read_u16::<BE>()? as usize;
            let mut bytes = vec![0u8; plies];
            reader.read_exact(&mut bytes)?;
            let info = Info::from((present, Path::from(bytes)));
            let n_choices = reader.read_u8()? as usize;
            let mut memory = Memory::default();
            memory.choices = vec![0u8; n_choices];
            reader.read_exact(&mut memory.choices)?;
            for a in 0..N_ACTIONS {
                memory.regret[a] = reader.read_f32::<BE>()?;
            }
            for a in 0..N_ACTIONS {
                memory.policy[a] = reader.read_f32::<BE>()?;
            }
            profile.encounters.insert(info, memory);
        }
        log::info!(
            "loaded blueprint ({} infos, iter {}) from {}",
            count,
            iterations,
            path.display()
        );
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kuhn::game::Kuhn;
    use crate::mccfr::trainer::Trainer;

    fn scratch(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("shortstack-{}-{}", std::process::id(), name))
    }

    #[test]
    fn checkpoints_round_trip_exactly() {
        let ref path = scratch("roundtrip.ckpt");
        let mut trainer = Trainer::new(Kuhn::new(), Profile::default(), 99);
        trainer.train(150, 0, 0, None).expect("no io during training");
        let saved = trainer.into_profile();
        saved.save(path).expect("save");
        let loaded = Profile::load(path).expect("load");
        assert!(saved == loaded);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn loading_garbage_fails_loudly() {
        let ref path = scratch("garbage.ckpt");
        std::fs::write(path, b"not a checkpoint").expect("write");
        assert!(Profile::load(path).is_err());
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn loading_missing_file_fails_loudly() {
        let ref path = scratch("absent.ckpt");
        assert!(Profile::load(path).is_err());
    }
}
